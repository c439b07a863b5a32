use super::{nearby::ResultFilter, prelude::*};

#[derive(Debug, Clone, PartialEq)]
pub struct TextQuery {
    pub text: String,
    pub limit: usize,
    pub filter: ResultFilter,
}

/// Bar-like establishments whose name, address or description
/// contains the given text, in insertion order.
pub fn search_by_text<R>(repo: &R, query: &TextQuery) -> Result<Vec<Establishment>>
where
    R: EstablishmentRepo + ?Sized,
{
    let text = query.text.trim();
    if text.is_empty() {
        return Err(Error::EmptyQuery);
    }
    if query.limit == 0 {
        return Err(Error::InvalidLimit);
    }
    log::debug!("Searching establishments by text '{text}'");
    let results = repo
        .establishments_by_text(text, ClassificationFilter::BarLike)?
        .into_iter()
        .filter(|e| query.filter.accepts(e))
        .take(query.limit)
        .collect();
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use barbuzz_entities::builders::*;

    fn query(text: &str) -> TextQuery {
        TextQuery {
            text: text.into(),
            limit: 12,
            filter: Default::default(),
        }
    }

    #[test]
    fn match_name_address_or_description() {
        let db = MockDb::default();
        db.insert(Establishment::build().name("The Jackalope").finish());
        db.insert(
            Establishment::build()
                .name("Rio")
                .address("601 W 6th St, Austin")
                .finish(),
        );
        db.insert(
            Establishment::build()
                .name("Kung Fu Saloon")
                .description("Arcade games and a big patio")
                .finish(),
        );
        db.insert(Establishment::build().name("Unrelated").finish());

        let names = |text| {
            search_by_text(&db, &query(text))
                .unwrap()
                .into_iter()
                .map(|e| e.name)
                .collect::<Vec<_>>()
        };
        assert_eq!(vec!["The Jackalope"], names("jACKal"));
        assert_eq!(vec!["Rio"], names("6th st"));
        assert_eq!(vec!["Kung Fu Saloon"], names("PATIO"));
        assert!(names("nothing like this").is_empty());
    }

    #[test]
    fn never_return_restaurants() {
        let db = MockDb::default();
        db.insert(Establishment::build().name("Taco Bar").finish());
        db.insert(
            Establishment::build()
                .name("Taco Palace")
                .classification(Classification::restaurant())
                .finish(),
        );
        let results = search_by_text(&db, &query("taco")).unwrap();
        assert_eq!(1, results.len());
        assert_eq!("Taco Bar", results[0].name);
    }

    #[test]
    fn reject_empty_text() {
        let db = MockDb::default();
        assert!(matches!(
            search_by_text(&db, &query("  ")),
            Err(Error::EmptyQuery)
        ));
    }

    #[test]
    fn filter_and_limit() {
        let db = MockDb::default();
        for i in 0..5 {
            db.insert(
                Establishment::build()
                    .name(&format!("Pub {i}"))
                    .price_level(if i % 2 == 0 { 2 } else { 1 })
                    .finish(),
            );
        }
        let mut q = query("pub");
        q.limit = 2;
        q.filter.price_level = Some(PriceLevel::try_from(2).unwrap());
        let names: Vec<_> = search_by_text(&db, &q)
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(vec!["Pub 0", "Pub 2"], names);
    }
}
