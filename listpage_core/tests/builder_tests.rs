mod helpers;

use helpers::*;
use listpage_core::builder::{
    BuilderError, BuilderView, ContextualFilterBuilder, DefaultValueBuilder, EditorSession,
};
use listpage_core::config::{FieldRemapping, ListPageConfiguration};
use listpage_core::context::EntityContext;
use listpage_core::filter::{FilterId, PresetOperator};

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn new_filter_id(view: BuilderView) -> FilterId {
        match view {
            BuilderView::Edit(form) => form.filter_id,
            BuilderView::Summary(_) => panic!("Expected an edit form"),
        }
    }

    #[test]
    fn test_configure_save_and_run_list_page() {
        init_logging();
        let catalog = catalog();
        let defaults = DefaultValueBuilder::new(&catalog, source());
        let contextual = ContextualFilterBuilder::new(&catalog, source());
        let mut session = EditorSession::new();
        let stored = ListPageConfiguration::default();
        defaults.initialize(&mut session, &stored);
        contextual.initialize(&mut session, &stored);

        let contextual_id = new_filter_id(contextual.choose_facet(&mut session, Some("select_one")));
        contextual
            .commit(&mut session, contextual_id.as_str(), "or", Vec::new())
            .unwrap();
        let default_id = new_filter_id(defaults.choose_facet(&mut session, Some("select_one")));
        defaults
            .commit(&mut session, default_id.as_str(), "or", strings(&["test2"]))
            .unwrap();

        let mut configuration = ListPageConfiguration::default();
        defaults.save(&session, &mut configuration);
        contextual.save(&session, &mut configuration);

        // Persist and read back as a request would
        let configuration = ListPageConfiguration::from_json_str(&configuration.to_json_string());
        assert_eq!(configuration.contextual_filters.len(), 1);
        assert_eq!(configuration.default_filter_values.len(), 1);

        let mut nodes = listed_nodes();
        nodes.push(node("node with both selects").with_field(
            "field_select_one",
            listpage_core::FieldValue::List(vec!["test1".into(), "test2".into()]),
        ));
        nodes.push(node("node with test2").with_field("field_select_one", "test2"));
        let index = index(nodes);
        let context = EntityContext::new(contextual_page().with_field("field_select_one", "test1"));

        let titles = run_list_page(&index, &configuration, &context, &FieldRemapping::new());
        assert_eq!(titles, vec!["node with both selects".to_string()]);
    }

    #[test]
    fn test_reopening_editor_seeds_stored_filters() {
        init_logging();
        let catalog = catalog();
        let builder = DefaultValueBuilder::new(&catalog, source());

        let mut first = EditorSession::new();
        builder.initialize(&mut first, &ListPageConfiguration::default());
        let filter_id = new_filter_id(builder.choose_facet(&mut first, Some("created")));
        builder
            .commit(&mut first, filter_id.as_str(), "or", strings(&["bt|2020-01-01|2020-01-31"]))
            .unwrap();
        let mut configuration = ListPageConfiguration::default();
        builder.save(&first, &mut configuration);

        let mut second = EditorSession::new();
        builder.initialize(&mut second, &configuration);
        let rows = builder.summarize(&second);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].facet_label, "Created");
        assert_eq!(rows[0].values_label, "Between 01 January 2020 and 31 January 2020");
    }

    #[test]
    fn test_contextual_builder_offers_only_set_operator_facets() {
        let catalog = catalog();
        let builder = ContextualFilterBuilder::new(&catalog, source());
        let ids: Vec<String> = builder.available_facets().into_iter().map(|f| f.id).collect();
        assert_eq!(ids, vec!["link", "reference", "select_one", "test_boolean"]);

        let defaults = DefaultValueBuilder::new(&catalog, source());
        assert_eq!(defaults.available_facets().len(), 7);
    }

    #[test]
    fn test_failed_commit_keeps_other_drafts() {
        init_logging();
        let catalog = catalog();
        let builder = ContextualFilterBuilder::new(&catalog, source());
        let mut session = EditorSession::new();
        builder.initialize(&mut session, &ListPageConfiguration::default());

        let reference = new_filter_id(builder.choose_facet(&mut session, Some("reference")));
        let link = new_filter_id(builder.choose_facet(&mut session, Some("link")));

        assert_matches!(
            builder.commit(&mut session, reference.as_str(), "nor", Vec::new()),
            Err(BuilderError::UnknownOperator(_))
        );
        builder
            .commit(&mut session, link.as_str(), "and", Vec::new())
            .unwrap();

        let open = session.open_drafts("contextual", &source().search_id);
        assert_eq!(open, vec![&reference]);
        assert_eq!(builder.current_filters(&session).len(), 1);

        // The failed draft can still be committed
        builder
            .commit(&mut session, reference.as_str(), "not", Vec::new())
            .unwrap();
        let filters = builder.current_filters(&session);
        assert_eq!(
            filters.get(reference.as_str()).map(|f| f.operator()),
            Some(PresetOperator::Not)
        );
    }

    #[test]
    fn test_summary_header_per_kind() {
        let catalog = catalog();
        let mut session = EditorSession::new();

        let view = DefaultValueBuilder::new(&catalog, source()).view(&session);
        assert_matches!(view, BuilderView::Summary(summary) if summary.values_header == "Default value");

        let contextual = ContextualFilterBuilder::new(&catalog, source());
        let view = contextual.choose_facet(&mut session, None);
        assert_matches!(view, BuilderView::Summary(summary) if summary.values_header == "Operator");
    }
}
