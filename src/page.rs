use crate::{
    errors,
    ingest::record::{Customer, Dataset},
    validate::{validate_limit, validate_start},
};

/// One page of the dataset. `start` is the clamped offset actually used,
/// `limit` echoes the request.
#[derive(Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<'a> {
    pub data: &'a [Customer],
    pub start: usize,
    pub limit: usize,
    pub total: usize,
    pub has_more: bool,
}

pub fn page(dataset: &Dataset, start: i64, limit: i64) -> errors::Result<Page<'_>> {
    let start = validate_start(start)?;
    let limit = validate_limit(limit)?;

    let total = dataset.len();
    let slice_start = start.min(total);
    let slice_end = slice_start.saturating_add(limit).min(total);

    Ok(Page {
        data: &dataset.records()[slice_start..slice_end],
        start: slice_start,
        limit,
        total,
        has_more: slice_end < total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::record::CsvCustomerRow;

    fn dataset_of(count: u64) -> Dataset {
        Dataset::new(
            (1..=count)
                .map(|id| Customer::from_row(id, CsvCustomerRow::default()))
                .collect(),
        )
    }

    fn ids(page: &Page<'_>) -> Vec<u64> {
        page.data.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_page_tail_of_dataset() {
        let dataset = dataset_of(25);
        let result = page(&dataset, 20, 10).unwrap();

        assert_eq!(ids(&result), vec![21, 22, 23, 24, 25]);
        assert_eq!(result.start, 20);
        assert_eq!(result.limit, 10);
        assert_eq!(result.total, 25);
        assert!(!result.has_more);
    }

    #[test]
    fn test_page_start_past_end_is_clamped() {
        let dataset = dataset_of(25);
        let result = page(&dataset, 30, 5).unwrap();

        assert!(result.data.is_empty());
        assert_eq!(result.start, 25);
        assert_eq!(result.limit, 5);
        assert_eq!(result.total, 25);
        assert!(!result.has_more);
    }

    #[test]
    fn test_page_first_page_has_more() {
        let dataset = dataset_of(25);
        let result = page(&dataset, 0, 10).unwrap();

        assert_eq!(ids(&result), (1..=10).collect::<Vec<_>>());
        assert!(result.has_more);
    }

    #[test]
    fn test_page_huge_limit_does_not_overflow() {
        let dataset = dataset_of(3);
        let result = page(&dataset, 2, i64::MAX).unwrap();

        assert_eq!(ids(&result), vec![3]);
        assert!(!result.has_more);
    }

    #[test]
    fn test_page_on_empty_dataset() {
        let dataset = Dataset::empty();
        let result = page(&dataset, 0, 10).unwrap();

        assert!(result.data.is_empty());
        assert_eq!(result.start, 0);
        assert_eq!(result.total, 0);
        assert!(!result.has_more);
    }

    #[test]
    fn test_page_bounds_hold_for_every_offset() {
        let total = 25usize;
        let dataset = dataset_of(total as u64);

        for start in 0..=total {
            for limit in [1usize, 2, 7, 10, 25, 26, 100] {
                let result = page(&dataset, start as i64, limit as i64).unwrap();
                let expected_len = limit.min(total - start);

                assert_eq!(result.data.len(), expected_len);
                assert_eq!(result.start, start);
                assert_eq!(result.has_more, start + expected_len < total);
                if let Some(first) = result.data.first() {
                    assert_eq!(first.id, start as u64 + 1);
                }
            }
        }
    }

    #[test]
    fn test_page_rejects_invalid_parameters() {
        let dataset = dataset_of(5);

        for (start, limit) in [(-1, 10), (0, 0), (0, -5)] {
            let error = page(&dataset, start, limit).unwrap_err();
            assert_eq!(error.code, errors::ErrorCodes::ValidationError);
        }
    }

    #[test]
    fn test_page_serializes_response_shape() {
        let dataset = dataset_of(2);
        let value = serde_json::to_value(page(&dataset, 1, 1).unwrap()).unwrap();

        assert_eq!(value["start"], 1);
        assert_eq!(value["limit"], 1);
        assert_eq!(value["total"], 2);
        assert_eq!(value["hasMore"], false);
        assert_eq!(value["data"][0]["id"], 2);
    }
}
