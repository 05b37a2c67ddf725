// Copyright 2025 the Swipedeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual derivation: where each visible card sits, how it is rotated, and how it layers.
//!
//! Everything here is a pure function of the drag offset, the card's list position, the top
//! card's list position, and the stack settle offset. The deck derives one [`CardLayout`] per
//! visible card on each render pass.

use kurbo::{Affine, Point, Vec2};
use swipedeck_motion::Interpolation;

use crate::types::LayerKey;

/// Role of a visible card.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum CardRole {
    /// The interactive card; follows the drag offset.
    Top,
    /// An inert card further down the stack; ignores the drag offset.
    Stacked,
}

/// Resolved placement of one visible card.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CardLayout<K> {
    /// Key of the item shown on this card.
    pub key: K,
    /// Position of the item in the list.
    pub item_index: usize,
    /// Whether this is the interactive card.
    pub role: CardRole,
    /// Drag translation. Always zero for stacked cards.
    pub translation: Vec2,
    /// Rotation in degrees, positive clockwise in a y-down space. Always zero for stacked cards.
    pub rotation_degrees: f64,
    /// Vertical offset that fans the stack out below the top card.
    pub stack_offset: f64,
    /// Stacking order; higher draws on top.
    pub layer: LayerKey,
}

impl<K> CardLayout<K> {
    /// True for the interactive card.
    #[inline]
    pub fn is_top(&self) -> bool {
        self.role == CardRole::Top
    }

    /// Total offset from the card's resting origin.
    pub fn offset(&self) -> Vec2 {
        self.translation + Vec2::new(0.0, self.stack_offset)
    }

    /// Transform for drawing the card: rotate about `anchor` (typically the card's center in its
    /// own coordinates), then translate by [`offset`](Self::offset).
    pub fn transform(&self, anchor: Point) -> Affine {
        Affine::translate(self.offset())
            * Affine::rotate_about(self.rotation_degrees.to_radians(), anchor)
    }
}

/// Inputs shared by every card of one render pass.
#[derive(Copy, Clone, Debug)]
pub(crate) struct StackPose<'a> {
    pub(crate) top_index: usize,
    pub(crate) position: Vec2,
    pub(crate) settle: f64,
    pub(crate) stack_step: f64,
    pub(crate) rotation: &'a Interpolation<3>,
}

/// Layout of the card at `item_index`, or `None` for dismissed cards.
pub(crate) fn card_layout<K>(
    pose: &StackPose<'_>,
    item_index: usize,
    key: K,
) -> Option<CardLayout<K>> {
    let depth = item_index.checked_sub(pose.top_index)?;
    let layer = LayerKey::for_index(item_index);
    if depth == 0 {
        return Some(CardLayout {
            key,
            item_index,
            role: CardRole::Top,
            translation: pose.position,
            rotation_degrees: pose.rotation.map(pose.position.x),
            stack_offset: pose.settle,
            layer,
        });
    }
    let fan = depth as f64 * pose.stack_step;
    Some(CardLayout {
        key,
        item_index,
        role: CardRole::Stacked,
        translation: Vec2::ZERO,
        rotation_degrees: 0.0,
        stack_offset: fan + pose.settle,
        layer,
    })
}
