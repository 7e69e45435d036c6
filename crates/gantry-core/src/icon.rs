//! Provider icon categories for diagram nodes.
//!
//! Each node in a Gantry diagram carries an [`Icon`] naming the kind of
//! actor or resource it represents. Since Graphviz has no provider icon
//! bitmaps, every category maps to a fixed shape and a provider-palette
//! fill: GitHub resources use the GitHub dark/blue colors, Azure resources
//! the Azure blue, and the runtime marker the PHP purple.

/// The provider/category of a diagram node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    /// End users of the deployed application.
    Users,
    /// A source code repository (GitHub).
    Repository,
    /// A CI/CD automation pipeline (GitHub Actions).
    Pipeline,
    /// A cloud storage account (Azure Storage).
    StorageAccount,
    /// A compute hosting plan (Azure App Service plan).
    AppServicePlan,
    /// A deployed web application (Azure App Service).
    WebApp,
    /// An application runtime/language marker.
    Runtime,
}

impl Icon {
    /// The Graphviz node shape for this category.
    pub fn shape(self) -> &'static str {
        match self {
            Icon::Users => "oval",
            Icon::Repository => "folder",
            Icon::Pipeline => "component",
            Icon::StorageAccount => "cylinder",
            Icon::AppServicePlan => "box3d",
            Icon::WebApp => "box",
            Icon::Runtime => "note",
        }
    }

    /// The fill color for this category, from the provider's palette.
    pub fn fill_color(self) -> &'static str {
        match self {
            Icon::Users => "#e8e8e8",
            Icon::Repository => "#24292e",
            Icon::Pipeline => "#2088ff",
            Icon::StorageAccount => "#0078d4",
            Icon::AppServicePlan => "#0078d4",
            Icon::WebApp => "#0078d4",
            Icon::Runtime => "#777bb4",
        }
    }

    /// The label font color that is readable on [`fill_color`](Self::fill_color).
    pub fn font_color(self) -> &'static str {
        match self {
            Icon::Users => "black",
            _ => "white",
        }
    }
}
