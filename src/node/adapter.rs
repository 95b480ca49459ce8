//! Host-node adapter.
//!
//! Maps the engine's pure functions onto a graph-host registration surface:
//! declared input widgets, a single execute entry point returning the
//! unchanged passthrough tensors, and an unconditional cache-invalidation
//! token so the preview regenerates every execution.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::{Value, json};

use crate::config::params::{BlendMode, GuideConfig, GuideParams};
use crate::encode::sink::PreviewSink;
use crate::node::tensor::{ImageTensor, MaskTensor};
use crate::pipeline::preview;

/// The composition-guides node.
///
/// Stateless: every invocation builds a fresh [`GuideConfig`] from the flat
/// parameter set and discards it afterwards.
#[derive(Clone, Copy, Debug, Default)]
pub struct GuideNode;

impl GuideNode {
    /// Run one invocation: render and push the preview, return the inputs.
    ///
    /// The returned image and mask are the exact values passed in; nothing in
    /// the preview path can alter them. Pipeline failures are logged and do
    /// not propagate — this node is a visualization aid, not a data stage.
    pub fn execute(
        &self,
        image: ImageTensor,
        mask: Option<MaskTensor>,
        params: &GuideParams,
        node_id: &str,
        sink: &mut dyn PreviewSink,
    ) -> (ImageTensor, Option<MaskTensor>) {
        let config = GuideConfig::from_params(params);
        if let Err(err) = preview::run(&image, &config, node_id, sink) {
            tracing::warn!(node_id, error = %err, "preview render failed");
        }
        (image, mask)
    }
}

/// Monotonically changing cache-buster token.
///
/// Hosts compare this value across executions to decide whether a node must
/// recompute; it never repeats, so the preview regenerates every time. Based
/// on the wall clock with an atomic tick to break ties inside one instant.
pub fn change_token() -> u64 {
    static LAST: AtomicU64 = AtomicU64::new(0);

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let prev = LAST
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |last| {
            Some(now.max(last.wrapping_add(1)))
        })
        .unwrap_or(now);
    now.max(prev.wrapping_add(1))
}

/// Declared input widgets for host registration.
///
/// Shape and defaults mirror the node's user-facing parameter table; consumed
/// by hosts that build their widget UI from a JSON description.
pub fn input_spec() -> Value {
    let blend_modes: Vec<&str> = BlendMode::ALL.iter().map(|m| m.name()).collect();

    json!({
        "required": {
            "image": ["IMAGE"],

            "preview_resolution_limit": ["INT", {"default": 1024, "min": 256, "max": 8192, "step": 64}],
            "grid_color_rgb": ["STRING", {"default": "255,255,255,255"}],
            "line_thickness": ["FLOAT", {"default": 1.0, "min": 0.1, "max": 32.0, "step": 0.1}],
            "blend_mode": [blend_modes],

            "grid": ["BOOLEAN", {"default": true}],
            "grid_lines_x": ["INT", {"default": 3, "min": 2, "max": 64, "step": 1}],
            "grid_lines_y": ["INT", {"default": 3, "min": 2, "max": 64, "step": 1}],
            "diagonals": ["BOOLEAN", {"default": false}],
            "phi_grid": ["BOOLEAN", {"default": false}],
            "pyramid": [["Off", "Up / Down", "Left / Right", "Both"]],
            "golden_triangles": [["Off", "Both", "Set 1 (TL-BR)", "Set 2 (TR-BL)"]],

            "perspective": ["BOOLEAN", {"default": false}],
            "perspective_lines": ["INT", {"default": 8, "min": 2, "max": 32, "step": 1}],
            "perspective_x": ["FLOAT", {"default": 0.5, "min": 0.0, "max": 1.0, "step": 0.001}],
            "perspective_y": ["FLOAT", {"default": 0.5, "min": 0.0, "max": 1.0, "step": 0.001}],
        },
        "optional": {
            "mask": ["MASK"],
        },
    })
}
