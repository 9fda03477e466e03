//! Overlay domain: drag-to-dismiss for the control clusters.
//!
//! A finger that lands on a cluster and drags it further than the threshold
//! hides that cluster on release; a shorter drag snaps it back home.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::character::InputState;

use super::buttons::{CLUSTER_MARGIN, CLUSTER_SIZE};
use super::{Cluster, MobileControlRuntime};

/// Drag distance beyond which releasing the finger dismisses the cluster.
pub const HIDE_THRESHOLD: f32 = 120.0;

/// Per-cluster drag tracking.
#[derive(Component, Debug, Default)]
pub struct DragState {
    /// Touch id currently dragging this cluster, if any.
    active: Option<u64>,
    /// Window position where the active touch started.
    grab: Vec2,
    /// Displacement of the cluster from its home position.
    pub offset: Vec2,
}

impl DragState {
    pub fn reset(&mut self) {
        self.active = None;
        self.offset = Vec2::ZERO;
    }
}

/// Cluster bounding box in window coordinates (origin top-left), accounting
/// for the current drag offset.
fn cluster_rect(cluster: Cluster, window: &Window, offset: Vec2) -> Rect {
    let left = match cluster {
        Cluster::Dpad => CLUSTER_MARGIN,
        Cluster::Actions => window.width() - CLUSTER_MARGIN - CLUSTER_SIZE,
    } + offset.x;
    let top = window.height() - CLUSTER_MARGIN - CLUSTER_SIZE + offset.y;
    Rect::new(left, top, left + CLUSTER_SIZE, top + CLUSTER_SIZE)
}

/// Move the cluster node according to its drag offset. Window y grows
/// downward while the node is anchored to the bottom edge, so the vertical
/// offset inverts.
fn apply_offset(cluster: Cluster, node: &mut Node, offset: Vec2) {
    node.bottom = Val::Px(CLUSTER_MARGIN - offset.y);
    match cluster {
        Cluster::Dpad => node.left = Val::Px(CLUSTER_MARGIN + offset.x),
        Cluster::Actions => node.right = Val::Px(CLUSTER_MARGIN - offset.x),
    }
}

/// Snap a cluster node back to its home corner.
pub fn snap_home(cluster: Cluster, node: &mut Node) {
    apply_offset(cluster, node, Vec2::ZERO);
}

pub fn drag_clusters(
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut input: ResMut<InputState>,
    mut runtime: ResMut<MobileControlRuntime>,
    mut clusters: Query<(&Cluster, &mut DragState, &mut Node, &Visibility)>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    for (cluster, mut drag, mut node, visibility) in &mut clusters {
        // Grab: first touch landing inside a visible, un-grabbed cluster.
        if drag.active.is_none() && *visibility != Visibility::Hidden {
            for touch in touches.iter_just_pressed() {
                if cluster_rect(*cluster, window, drag.offset).contains(touch.position()) {
                    drag.active = Some(touch.id());
                    drag.grab = touch.position();
                    break;
                }
            }
        }

        let Some(id) = drag.active else {
            continue;
        };

        // Follow the finger while it stays down.
        if let Some(touch) = touches.iter().find(|t| t.id() == id) {
            drag.offset = touch.position() - drag.grab;
            apply_offset(*cluster, &mut node, drag.offset);
        }

        // Release: dismiss past the threshold, otherwise snap back.
        if touches.just_released(id) || touches.just_canceled(id) {
            if drag.offset.length() > HIDE_THRESHOLD {
                match cluster {
                    Cluster::Dpad => {
                        super::hide_dpad(&mut runtime, &mut input);
                        info!("D-pad dismissed by drag");
                    }
                    Cluster::Actions => {
                        super::hide_actions(&mut runtime);
                        info!("Action cluster dismissed by drag");
                    }
                }
            }
            drag.reset();
            snap_home(*cluster, &mut node);
        }
    }
}
