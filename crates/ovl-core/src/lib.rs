pub mod catalog;
pub mod geometry;
pub mod id;
pub mod model;

pub use catalog::{
    PropertyConstraints, PropertyDef, PropertyType, SelectOption, WidgetCatalog, WidgetCategory,
    WidgetMetadata,
};
pub use geometry::{
    Rect, container_bounds, effective_bounds, effective_size, is_out_of_bounds, resolved_bounds,
};
pub use id::WidgetId;
pub use model::{CanvasConfig, Layout, LayoutMetadata, PropertyValue, Widget};
