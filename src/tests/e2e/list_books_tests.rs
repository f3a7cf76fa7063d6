use crate::modules::books::adapters::outbound::books_in_memory::InMemoryBookRepository;
use crate::modules::books::core::filter::BookFilter;
use crate::modules::books::core::ports::BookRepository;
use crate::tests::fixtures::book_input::BookInputBuilder;
use crate::tests::fixtures::primitives::{SequenceIdGenerator, SteppingClock};

#[tokio::test]
async fn lists_books_through_every_criterion_after_a_series_of_writes() {
    let repository =
        InMemoryBookRepository::with(SequenceIdGenerator::new("book"), SteppingClock::new());

    let names = ["Laru", "Kita", "Senja", "Larutan"];
    let mut ids = Vec::new();
    for (i, name) in names.into_iter().enumerate() {
        let id = repository
            .create(
                BookInputBuilder::new()
                    .name(name)
                    .reading(i % 2 == 0)
                    .read_page(if i < 2 { 100 } else { 0 })
                    .build(),
            )
            .await
            .unwrap();
        ids.push(id);
    }

    // Kita finishes reading, Senja is dropped.
    repository
        .update(
            &ids[1],
            BookInputBuilder::new().name("Kita").reading(true).read_page(100).build(),
        )
        .await
        .unwrap();
    repository.delete_by_id(&ids[2]).await.unwrap();

    let listed = |filter: BookFilter| {
        let repository = &repository;
        async move {
            repository
                .list_all(&filter)
                .await
                .into_iter()
                .map(|summary| summary.name)
                .collect::<Vec<_>>()
        }
    };

    assert_eq!(
        listed(BookFilter::default()).await,
        vec!["Laru", "Kita", "Larutan"]
    );
    assert_eq!(
        listed(BookFilter::new(Some("ARU".into()), None, None)).await,
        vec!["Laru", "Larutan"]
    );
    assert_eq!(
        listed(BookFilter::new(None, Some(true), None)).await,
        vec!["Laru", "Kita"]
    );
    assert_eq!(
        listed(BookFilter::new(None, Some(false), None)).await,
        vec!["Larutan"]
    );
    assert_eq!(
        listed(BookFilter::new(None, None, Some(true))).await,
        vec!["Laru", "Kita"]
    );
    assert_eq!(
        listed(BookFilter::new(None, None, Some(false))).await,
        vec!["Larutan"]
    );
}
