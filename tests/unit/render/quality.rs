use super::*;

#[test]
fn default_quality_leaves_every_hint_unset() {
    assert_eq!(RenderHints::for_quality(Quality::Default), RenderHints::UNSET);
    assert!(RenderHints::UNSET.vello_render_mode().is_none());
}

#[test]
fn min_quality_prefers_speed() {
    let h = RenderHints::for_quality(Quality::Min);
    assert!(!h.antialiasing_enabled());
    assert!(!h.fractional_metrics_enabled());
    assert!(!h.dithering_enabled());
    assert_eq!(h.interpolation_or_default(), Interpolation::NearestNeighbor);
    assert_eq!(h.render_speed, Some(RenderSpeed::Speed));
}

#[test]
fn max_quality_prefers_fidelity() {
    let h = RenderHints::for_quality(Quality::Max);
    assert!(h.antialiasing_enabled());
    assert!(h.fractional_metrics_enabled());
    assert!(h.dithering_enabled());
    assert_eq!(h.interpolation_or_default(), Interpolation::Bicubic);
    assert_eq!(h.render_speed, Some(RenderSpeed::Quality));
}

#[test]
fn unset_hints_resolve_to_backend_defaults() {
    let h = RenderHints::UNSET;
    assert!(h.antialiasing_enabled());
    assert!(h.fractional_metrics_enabled());
    assert!(!h.dithering_enabled());
    assert_eq!(h.interpolation_or_default(), Interpolation::NearestNeighbor);
}
