pub mod controls;
pub mod drag;

pub use controls::wire_controls;
pub use drag::wire_drag;
