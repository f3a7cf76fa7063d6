// Shared test fixture for the BookInput payload.

use crate::modules::books::core::book::BookInput;

pub struct BookInputBuilder {
    inner: BookInput,
}

impl Default for BookInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl BookInputBuilder {
    pub fn new() -> Self {
        Self {
            inner: BookInput {
                name: Some("Kita".to_string()),
                year: 2020,
                author: "John Doe".to_string(),
                summary: "Lorem ipsum dolor sit amet".to_string(),
                publisher: "Dicoding Indonesia".to_string(),
                page_count: 100,
                read_page: 25,
                reading: false,
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = Some(v.into());
        self
    }

    pub fn without_name(mut self) -> Self {
        self.inner.name = None;
        self
    }

    pub fn year(mut self, v: i32) -> Self {
        self.inner.year = v;
        self
    }

    pub fn author(mut self, v: impl Into<String>) -> Self {
        self.inner.author = v.into();
        self
    }

    pub fn summary(mut self, v: impl Into<String>) -> Self {
        self.inner.summary = v.into();
        self
    }

    pub fn publisher(mut self, v: impl Into<String>) -> Self {
        self.inner.publisher = v.into();
        self
    }

    pub fn page_count(mut self, v: u32) -> Self {
        self.inner.page_count = v;
        self
    }

    pub fn read_page(mut self, v: u32) -> Self {
        self.inner.read_page = v;
        self
    }

    pub fn reading(mut self, v: bool) -> Self {
        self.inner.reading = v;
        self
    }

    pub fn build(self) -> BookInput {
        self.inner
    }

    /// The same payload as the JSON body a client would send.
    pub fn build_json(self) -> serde_json::Value {
        let input = self.inner;
        serde_json::json!({
            "name": input.name,
            "year": input.year,
            "author": input.author,
            "summary": input.summary,
            "publisher": input.publisher,
            "pageCount": input.page_count,
            "readPage": input.read_page,
            "reading": input.reading,
        })
    }
}

#[cfg(test)]
mod book_input_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        assert_eq!(BookInputBuilder::default().build(), BookInputBuilder::new().build());
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = BookInputBuilder::new()
            .name("Laru")
            .year(1999)
            .author("Jane Roe")
            .summary("desc")
            .publisher("Gramedia")
            .page_count(10)
            .read_page(5)
            .reading(true)
            .build();

        assert_eq!(
            custom,
            BookInput {
                name: Some("Laru".to_string()),
                year: 1999,
                author: "Jane Roe".to_string(),
                summary: "desc".to_string(),
                publisher: "Gramedia".to_string(),
                page_count: 10,
                read_page: 5,
                reading: true,
            }
        );
    }

    #[rstest]
    fn build_json_decodes_back_into_the_same_input() {
        let builder = BookInputBuilder::new().without_name().reading(true);
        let decoded: BookInput = serde_json::from_value(builder.build_json()).unwrap();
        assert_eq!(decoded, BookInputBuilder::new().without_name().reading(true).build());
    }
}
