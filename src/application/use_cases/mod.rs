mod browse_catalog;

pub use browse_catalog::BrowseCatalogUseCase;
