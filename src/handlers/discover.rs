//! Discovery page handlers

use tracing::{debug, info};
use crate::discovery::{self, ResourceItem, ResourceKind};
use crate::handlers::render::{render_card, render_cards, render_categories};
use crate::services::ServiceFactory;
use crate::state::SessionCache;
use crate::utils::errors::Result;
use crate::utils::helpers::create_pagination_info;
use crate::utils::logging::log_api_error;

/// Filters for the discovery page
#[derive(Debug, Clone, Default)]
pub struct DiscoverOptions {
    pub query: Option<String>,
    pub categories: Vec<i64>,
    pub page: u32,
}

/// Fetch all three listings, merge them and apply the filters
pub async fn handle_discover(
    services: &ServiceFactory,
    session: &SessionCache,
    options: &DiscoverOptions,
) -> Result<String> {
    debug!(query = ?options.query, categories = ?options.categories, page = options.page, "Processing discover page");

    let resource_service = &services.resource_service;
    let list_query = resource_service.query(options.page, &options.categories);
    let bundle = match resource_service.fetch_all(&list_query, session.token()).await {
        Ok(bundle) => bundle,
        Err(e) => {
            log_api_error("resources", &e.to_string(), Some("discover"));
            return Err(e);
        }
    };

    let text = options.query.as_deref().unwrap_or("");
    let items = discovery::discover(&bundle, &options.categories, text);
    info!(results = items.len(), "Discover page rendered");

    let mut sections = vec!["Discover Your Next Opportunity".to_string()];
    if !text.trim().is_empty() {
        sections.push(format!("Results for \"{}\": {}", text.trim(), items.len()));
    }
    sections.push(render_cards(&items));
    sections.push(create_pagination_info(
        list_query.page,
        list_query.page_size,
        bundle.total_count(),
    ));

    Ok(sections.join("\n\n"))
}

/// Card for a single resource
pub async fn handle_resource(
    services: &ServiceFactory,
    session: &SessionCache,
    kind: ResourceKind,
    id: i64,
) -> Result<String> {
    let resource_service = &services.resource_service;
    let token = session.token();

    let item = match kind {
        ResourceKind::Event => ResourceItem::from(&resource_service.get_event(id, token).await?),
        ResourceKind::Program => ResourceItem::from(&resource_service.get_program(id, token).await?),
        ResourceKind::Competition => ResourceItem::from(&resource_service.get_competition(id, token).await?),
    };

    Ok(render_card(&item))
}

/// List categories available for filtering
pub async fn handle_categories(services: &ServiceFactory, selected: &[i64]) -> Result<String> {
    let categories = services.resource_service.list_categories().await?;
    debug!(count = categories.len(), "Categories fetched");
    Ok(render_categories(&categories, selected))
}
