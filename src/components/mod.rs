pub mod app;
pub mod connector_overlay;
pub mod dock;
pub mod map_controls;
pub mod map_view;
pub mod module_node;
