pub mod listener;
pub mod pointer;
pub mod wheel;

pub use listener::EventListener;
pub use pointer::wire_hover;
pub use wheel::wire_wheel;
