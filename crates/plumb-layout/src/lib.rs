//! Priority ranking engine for sibling layout conflicts.
//!
//! Given a container's already-resolved children, this crate decides which
//! sibling gives way first when space runs out:
//! - [`shrink_key`] and [`assign_resistance`] turn declared rank hints into
//!   a strict, collision-free ordering of compression-resistance values.
//! - [`arrange`] produces the arranged child order, including the flexible
//!   spacer injected for directional fill, plus fill-child designation.
//! - [`inferred_cross_alignment`] derives a container's cross-axis alignment
//!   from its gravity when no alignment was explicitly authored.
//!
//! Everything here is pure data-in/data-out: the external constraint system
//! consumes the computed priorities, this crate owns no geometry.

mod arrange;
mod priority;

pub use arrange::{
    arrange, inferred_cross_alignment, spacer_placement, Arrangement, ChildLayout, CrossAlign,
    Slot, SpacerPlacement,
};
pub use priority::{
    assign_resistance, shrink_key, ChildSizing, BASE_COMPRESSION_RESISTANCE, FILL_SIZE_HUGGING,
    SPACER_HUGGING,
};
