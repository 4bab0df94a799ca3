mod server;
mod ui;
mod window;


pub use window::MapWindow;
