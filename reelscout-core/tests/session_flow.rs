mod support;

use std::sync::Arc;
use std::time::Duration;

use reelscout_core::config::SessionConfig;
use reelscout_core::error::FetchError;
use reelscout_core::favorites::FavoriteChange;
use reelscout_core::persistence::MemoryStore;
use reelscout_core::providers::CatalogResponse;
use reelscout_core::query::{DiscoverQuery, QueryDescriptor};
use reelscout_core::request::{FetchOutcome, RequestState};
use reelscout_core::session::DiscoverySession;
use reelscout_model::{FilterSet, GenreId, MovieId, SortOption};
use support::{RecordingTrending, ScriptedCatalog, movie, shared};

fn session_over(
    catalog: &Arc<ScriptedCatalog>,
    trending: &Arc<RecordingTrending>,
) -> DiscoverySession {
    DiscoverySession::new(
        catalog.clone(),
        trending.clone(),
        shared(MemoryStore::new()),
        &SessionConfig::default(),
    )
}

#[tokio::test]
async fn search_commits_results_and_reports_the_top_hit() {
    let catalog = shared(ScriptedCatalog::fixed(vec![movie(1, "Batman")], 3));
    let trending = shared(RecordingTrending::default());
    let session = session_over(&catalog, &trending);

    let handle = session.submit_search("batman").expect("search issued");
    assert_eq!(handle.await.unwrap(), FetchOutcome::Committed);

    let view = session.view();
    assert_eq!(view.results.len(), 1);
    assert_eq!(view.total_pages, 3);
    assert!(!view.show_filters);
    assert_eq!(view.page_controls.map(|c| c.label()), Some("Page 1 of 3".to_string()));
    assert_eq!(trending.reports(), vec![("batman".to_string(), MovieId(1))]);
    assert_eq!(
        catalog.last_query(),
        Some(QueryDescriptor::Search {
            text: "batman".into(),
            page: 1
        })
    );
}

#[tokio::test]
async fn reported_page_count_is_clamped_to_the_ceiling() {
    let catalog = shared(ScriptedCatalog::fixed(vec![movie(1, "Heat")], 800));
    let session = session_over(&catalog, &shared(RecordingTrending::default()));

    session.refresh().await.unwrap();
    assert_eq!(session.view().total_pages, 500);

    session.set_page(900).unwrap().await.unwrap();
    assert_eq!(session.state().page, 500);
}

#[tokio::test]
async fn discover_query_carries_filters_sort_and_page() {
    let catalog = shared(ScriptedCatalog::fixed(vec![movie(1, "Tenet")], 5));
    let session = DiscoverySession::builder(
        catalog.clone(),
        shared(RecordingTrending::default()),
        shared(MemoryStore::new()),
    )
    .filters(FilterSet::new().with_genres([GenreId(28)]).with_year(Some(2020)))
    .sort(SortOption::RatingDesc)
    .page(2)
    .build();

    session.refresh().await.unwrap();

    let query = catalog.last_query().unwrap();
    assert_eq!(query.search_term(), None);
    let endpoint = query.endpoint();
    assert_eq!(endpoint.param("with_genres"), Some("28"));
    assert_eq!(endpoint.param("primary_release_year"), Some("2020"));
    assert_eq!(endpoint.param("sort_by"), Some("vote_average.desc"));
    assert_eq!(endpoint.param("page"), Some("2"));
}

#[tokio::test]
async fn changing_the_year_on_page_three_restarts_at_page_one() {
    let catalog = shared(ScriptedCatalog::fixed(vec![movie(1, "Heat")], 10));
    let session = session_over(&catalog, &shared(RecordingTrending::default()));

    session.refresh().await.unwrap();
    session.set_page(3).unwrap().await.unwrap();
    assert_eq!(session.state().page, 3);

    session.set_year(Some(2020)).unwrap().await.unwrap();

    assert_eq!(session.state().page, 1);
    assert_eq!(
        catalog.last_query(),
        Some(QueryDescriptor::Discover(DiscoverQuery {
            sort: SortOption::PopularityDesc,
            page: 1,
            genres: Vec::new(),
            year: Some(2020),
        }))
    );
}

async fn session_on_page_three(catalog: &Arc<ScriptedCatalog>) -> DiscoverySession {
    let session = session_over(catalog, &shared(RecordingTrending::default()));
    session.refresh().await.unwrap();
    session.set_page(3).unwrap().await.unwrap();
    assert_eq!(session.state().page, 3);
    session
}

#[tokio::test]
async fn changing_the_sort_restarts_at_page_one() {
    let catalog = shared(ScriptedCatalog::fixed(vec![movie(1, "Heat")], 10));
    let session = session_on_page_three(&catalog).await;

    session.set_sort(SortOption::ReleaseDateDesc).unwrap().await.unwrap();

    assert_eq!(session.state().page, 1);
    assert_eq!(
        catalog.last_query(),
        Some(QueryDescriptor::Discover(DiscoverQuery {
            sort: SortOption::ReleaseDateDesc,
            page: 1,
            genres: Vec::new(),
            year: None,
        }))
    );
}

#[tokio::test]
async fn toggling_a_genre_restarts_at_page_one() {
    let catalog = shared(ScriptedCatalog::fixed(vec![movie(1, "Heat")], 10));
    let session = session_on_page_three(&catalog).await;

    session.toggle_genre(GenreId(80)).unwrap().await.unwrap();

    assert_eq!(session.state().page, 1);
    let query = catalog.last_query().unwrap();
    assert_eq!(query.page(), 1);
    assert_eq!(query.endpoint().param("with_genres"), Some("80"));
}

#[tokio::test]
async fn starting_a_search_restarts_at_page_one() {
    let catalog = shared(ScriptedCatalog::fixed(vec![movie(1, "Heat")], 10));
    let session = session_on_page_three(&catalog).await;

    session.submit_search("x").unwrap().await.unwrap();

    assert_eq!(session.state().page, 1);
    assert_eq!(
        catalog.last_query(),
        Some(QueryDescriptor::Search {
            text: "x".into(),
            page: 1
        })
    );
}

#[tokio::test]
async fn unchanged_inputs_issue_nothing() {
    let catalog = shared(ScriptedCatalog::fixed(vec![movie(1, "Heat")], 1));
    let session = session_over(&catalog, &shared(RecordingTrending::default()));

    assert!(session.set_page(2).is_none(), "page count still unknown");
    session.refresh().await.unwrap();

    assert!(session.set_sort(SortOption::PopularityDesc).is_none());
    assert!(session.set_year(None).is_none());
    assert!(session.clear_filters().is_none());
    assert!(session.next_page().is_none());
    assert!(session.previous_page().is_none());
    assert!(session.view().page_controls.is_none());
    assert_eq!(catalog.queries().len(), 1);
}

#[tokio::test]
async fn clear_filters_also_restores_default_sort() {
    let catalog = shared(ScriptedCatalog::fixed(vec![movie(1, "Heat")], 4));
    let session = session_over(&catalog, &shared(RecordingTrending::default()));

    session.toggle_genre(GenreId(35)).unwrap().await.unwrap();
    session.set_sort(SortOption::TitleAsc).unwrap().await.unwrap();
    assert!(session.view().has_active_filters);

    session.clear_filters().unwrap().await.unwrap();
    let state = session.state();
    assert!(state.filters.is_empty());
    assert_eq!(state.sort, SortOption::default());
    assert!(!session.view().has_active_filters);
}

#[tokio::test(start_paused = true)]
async fn typing_settles_into_a_single_search() {
    let catalog = shared(ScriptedCatalog::fixed(vec![movie(7, "Batman Begins")], 2));
    let trending = shared(RecordingTrending::default());
    let session = session_over(&catalog, &trending);

    for text in ["b", "ba", "bat", "batm", "batman"] {
        session.set_search_text(text);
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    assert!(catalog.queries().is_empty());
    assert_eq!(session.state().debounced_search_text, "");

    tokio::time::sleep(Duration::from_millis(600)).await;

    assert_eq!(
        catalog.queries(),
        vec![QueryDescriptor::Search {
            text: "batman".into(),
            page: 1
        }]
    );
    let view = session.view();
    assert_eq!(view.debounced_search_text, "batman");
    assert_eq!(view.results.len(), 1);
    assert_eq!(trending.reports(), vec![("batman".to_string(), MovieId(7))]);
}

#[tokio::test(start_paused = true)]
async fn clearing_the_search_returns_to_discover_mode() {
    let catalog = shared(ScriptedCatalog::fixed(vec![movie(7, "Heat")], 2));
    let session = session_over(&catalog, &shared(RecordingTrending::default()));

    session.submit_search("heat").unwrap().await.unwrap();
    session.set_search_text("");
    tokio::time::sleep(Duration::from_millis(600)).await;

    let view = session.view();
    assert!(view.show_filters);
    assert!(matches!(
        catalog.last_query(),
        Some(QueryDescriptor::Discover(_))
    ));
}

#[tokio::test]
async fn domain_failure_surfaces_its_message_and_clears_results() {
    let catalog = shared(ScriptedCatalog::new(|query| match query.search_term() {
        Some("nothing") => Ok(CatalogResponse::domain_failure("Movie not found!")),
        _ => Ok(CatalogResponse::results(vec![movie(1, "Heat")], 2)),
    }));
    let session = session_over(&catalog, &shared(RecordingTrending::default()));

    session.refresh().await.unwrap();
    assert_eq!(session.view().results.len(), 1);

    session.submit_search("nothing").unwrap().await.unwrap();
    let view = session.view();
    assert!(view.results.is_empty());
    assert_eq!(view.error_message.as_deref(), Some("Movie not found!"));
}

#[tokio::test]
async fn detail_failure_leaves_catalog_untouched() {
    let catalog = shared(
        ScriptedCatalog::fixed(vec![movie(1, "Heat")], 2)
            .with_detail(|_| Err(FetchError::Transport { status: 500 })),
    );
    let session = session_over(&catalog, &shared(RecordingTrending::default()));
    session.refresh().await.unwrap();
    let before = session.view();

    session.select_movie(MovieId(1)).unwrap().await.unwrap();
    let view = session.view();

    assert_eq!(view.selected.as_ref().map(|m| m.title.as_str()), Some("Heat"));
    assert_eq!(view.detail_error, Some("Failed to load movie details"));
    assert_eq!(view.catalog, before.catalog);
    assert_eq!(view.results, before.results);
    assert_eq!(view.error_message, None);

    session.close_detail();
    let view = session.view();
    assert!(!view.is_detail_open());
    assert_eq!(view.detail, RequestState::Idle);
    assert_eq!(view.results, before.results);
}

#[tokio::test]
async fn selecting_an_invalid_id_does_nothing() {
    let catalog = shared(ScriptedCatalog::fixed(Vec::new(), 0));
    let session = session_over(&catalog, &shared(RecordingTrending::default()));
    assert!(session.select_movie(MovieId(0)).is_none());
    assert!(!session.view().is_detail_open());
}

#[tokio::test]
async fn favorites_follow_the_id_across_queries() {
    let catalog = shared(ScriptedCatalog::new(|query| match query.search_term() {
        Some(_) => Ok(CatalogResponse::results(vec![movie(9, "Alien")], 1)),
        None => Ok(CatalogResponse::results(vec![movie(1, "Heat")], 1)),
    }));
    let session = session_over(&catalog, &shared(RecordingTrending::default()));

    session.refresh().await.unwrap();
    let heat = session.view().results[0].clone();
    assert_eq!(session.toggle_favorite(&heat).unwrap(), FavoriteChange::Added);

    session.submit_search("alien").unwrap().await.unwrap();
    let view = session.view();
    assert!(view.is_favorite(MovieId(1)));
    assert!(!view.is_favorite(MovieId(9)));

    session.select_movie(MovieId(1)).unwrap().await.unwrap();
    assert_eq!(session.view().selected, Some(heat));
}

#[tokio::test]
async fn trending_list_is_loaded_on_request() {
    let catalog = shared(ScriptedCatalog::fixed(vec![movie(1, "Batman")], 1));
    let trending = shared(RecordingTrending::default());
    let session = session_over(&catalog, &trending);

    session.submit_search("batman").unwrap().await.unwrap();
    assert!(session.trending().is_empty());

    let entries = session.load_trending().await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].search_term, "batman");
    assert_eq!(session.view().trending, entries);
}
