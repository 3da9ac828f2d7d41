//! Shared fixtures for listpage_core integration tests.

#![allow(dead_code)]

use chrono::DateTime;
use listpage_core::config::{FieldRemapping, ListPageConfiguration, ListSource};
use listpage_core::context::{ContextualValueResolver, ViewingContext, combine};
use listpage_core::facets::{Facet, FacetCatalog, QueryTypeKind, StaticFacetCatalog, WidgetConfig};
use listpage_core::filter::{FilterConfigurationMap, PresetFilter, PresetOperator, derive_filter_id};
use listpage_core::query_type::apply_filters;
use listpage_core::search::{MemoryIndex, SearchQuery};
use listpage_core::{Entity, EntityId, FieldValue};

pub const REF1: &str = "ref1";
pub const REF2: &str = "ref2";

/// The list source every fixture lists from.
pub fn source() -> ListSource {
    ListSource::new("node", "content_type_one")
}

pub fn catalog() -> StaticFacetCatalog {
    StaticFacetCatalog::new().with_facets(
        &source(),
        vec![
            Facet::new("body", "Body", "body")
                .with_query_type(QueryTypeKind::Fulltext)
                .with_widget(WidgetConfig::Fulltext { all_fields: false }),
            Facet::new("created", "Created", "created")
                .with_query_type(QueryTypeKind::Date)
                .with_widget(WidgetConfig::Date),
            Facet::new("link", "Link", "link").with_property_path("field_link"),
            Facet::new("reference", "Reference", "reference")
                .with_property_path("field_reference"),
            Facet::new("select_one", "Select one", "select_one")
                .with_property_path("field_select_one"),
            Facet::new("status", "Published", "status").with_widget(WidgetConfig::Links),
            Facet::new("test_boolean", "Test boolean", "test_boolean")
                .with_property_path("field_test_boolean"),
        ],
    )
}

pub fn reference(id: &str) -> FieldValue {
    FieldValue::Reference(EntityId::new(id))
}

pub fn node(title: &str) -> Entity {
    Entity::new(title, "node", "content_type_one")
        .with_field("title", title)
        .with_field("status", true)
}

/// The page the list is shown on.
pub fn contextual_page() -> Entity {
    Entity::new("My contextual page", "node", "page")
        .with_field("field_test_boolean", true)
        .with_field("field_reference", reference(REF1))
        .with_field("field_link", "http://example.com")
}

/// Two nodes per contextual field: one sharing the page's value, one not.
pub fn listed_nodes() -> Vec<Entity> {
    vec![
        node("visible boolean").with_field("field_test_boolean", true),
        node("not visible boolean").with_field("field_test_boolean", false),
        node("visible select").with_field("field_select_one", "test1"),
        node("not visible select").with_field("field_select_one", "test2"),
        node("visible reference").with_field("field_reference", reference(REF1)),
        node("not visible reference").with_field("field_reference", reference(REF2)),
        node("visible link").with_field("field_link", "http://example.com"),
        node("not visible link").with_field("field_link", "http://europa.eu"),
    ]
}

pub fn dated_node(title: &str, created: &str) -> Entity {
    let created = DateTime::parse_from_rfc3339(created).expect("Invalid fixture date");
    node(title).with_field("created", FieldValue::DateTime(created))
}

/// An index over the catalog's facet fields, reading each from its entity property.
pub fn index(entities: Vec<Entity>) -> MemoryIndex {
    let mut index = catalog()
        .facets_for(&source())
        .into_iter()
        .fold(MemoryIndex::new(source()), |index, facet| {
            let property = facet.source_field().to_string();
            index.with_field(&facet.field_identifier, &property)
        })
        .with_fulltext_field("title")
        .with_fulltext_field("body");
    index.index_all(entities);
    index
}

/// A contextual filter map with one operator-only filter per facet.
pub fn contextual_filters(filters: &[(&str, PresetOperator)]) -> FilterConfigurationMap {
    filters
        .iter()
        .map(|(facet, operator)| {
            (
                derive_filter_id(facet, Vec::<&str>::new()),
                PresetFilter::contextual(facet, *operator),
            )
        })
        .collect()
}

/// Runs a list page the way a request does and returns the matching titles, sorted.
pub fn run_list_page(
    index: &MemoryIndex,
    configuration: &ListPageConfiguration,
    context: &dyn ViewingContext,
    remapping: &FieldRemapping,
) -> Vec<String> {
    let catalog = catalog();
    let resolver = ContextualValueResolver::new(&catalog, remapping);
    let resolved = resolver.resolve(&source(), &configuration.contextual_filters, context);
    let filters = combine(&configuration.default_filter_values, resolved);

    let mut query = index.query();
    apply_filters(&mut query, &catalog, &source(), &filters);
    let mut titles: Vec<String> = query.execute().into_iter().map(|id| id.to_string()).collect();
    titles.sort();
    titles
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
