use crate::domain::a001_material_return::MaterialReturn;
use crate::domain::a002_transporter_payment::TransporterPayment;
use crate::enums::ViewId;

/// Record that can be matched against the table search box
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;

    /// Non-empty search fields joined with spaces, lower-cased
    fn haystack(&self) -> String {
        self.search_fields()
            .into_iter()
            .filter(|field| !field.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }

    /// Substring match on the lower-cased term, taken as typed
    fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        needle.is_empty() || self.haystack().contains(&needle)
    }
}

impl Searchable for MaterialReturn {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            &self.party_names,
            &self.transporter_name,
            &self.return_no,
            &self.do_number,
            &self.product_name,
            &self.vehicle_no,
        ]
    }
}

impl Searchable for TransporterPayment {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            &self.transporter_name,
            &self.payment_number,
            &self.vehicle_number,
        ]
    }
}

/// Requests shown in `view`.
///
/// Step views keep only the records currently sitting at that step; the
/// explorer shows everything. Non-table views (dashboard, kitting) apply
/// only the search term.
pub fn filter_returns<'a>(
    records: &'a [MaterialReturn],
    term: &str,
    view: ViewId,
) -> Vec<&'a MaterialReturn> {
    records
        .iter()
        .filter(|record| match view.step() {
            Some(_) => record.current_step().view() == Some(view),
            None => true,
        })
        .filter(|record| record.matches(term))
        .collect()
}

pub fn filter_payments<'a>(payments: &'a [TransporterPayment], term: &str) -> Vec<&'a TransporterPayment> {
    payments.iter().filter(|payment| payment.matches(term)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(return_no: &str, party: &str, actual1: &str) -> MaterialReturn {
        MaterialReturn {
            return_no: return_no.into(),
            party_names: party.into(),
            actual1: actual1.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_haystack_skips_empty_fields() {
        let r = MaterialReturn {
            party_names: "Shree Traders".into(),
            return_no: "RET-1001".into(),
            vehicle_no: "MH12AB".into(),
            ..Default::default()
        };
        assert_eq!(r.haystack(), "shree traders ret-1001 mh12ab");
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let records = vec![record("RET-1001", "Shree Traders", ""), record("RET-1002", "Om Steel", "")];
        let found = filter_returns(&records, "TRADERS", ViewId::Table);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].return_no, "RET-1001");

        assert_eq!(filter_returns(&records, "ret-100", ViewId::Table).len(), 2);
        assert_eq!(filter_returns(&records, "", ViewId::Table).len(), 2);
    }

    #[test]
    fn test_whitespace_is_part_of_the_term() {
        let records = vec![record("RET-1001", "Shree Traders", "")];
        assert!(filter_returns(&records, " ", ViewId::Table).is_empty());
        assert!(filter_returns(&records, "ret-1001 ", ViewId::Table).is_empty());
        assert_eq!(filter_returns(&records, "shree t", ViewId::Table).len(), 1);
    }

    #[test]
    fn test_step_views_keep_only_their_step() {
        let records = vec![
            record("RET-1", "A", ""),
            record("RET-2", "B", "2024-05-01"),
            record("RET-3", "C", ""),
        ];
        let step1 = filter_returns(&records, "", ViewId::Step1);
        assert_eq!(step1.iter().map(|r| r.return_no.as_str()).collect::<Vec<_>>(), vec!["RET-1", "RET-3"]);

        let step2 = filter_returns(&records, "", ViewId::Step2);
        assert_eq!(step2.len(), 1);
        assert!(filter_returns(&records, "", ViewId::Step4).is_empty());

        // search and step filter combine
        assert!(filter_returns(&records, "b", ViewId::Step1).is_empty());
    }

    #[test]
    fn test_completed_records_only_in_explorer() {
        let done = MaterialReturn {
            actual1: "x".into(),
            actual2: "x".into(),
            actual3: "x".into(),
            actual4: "x".into(),
            ..Default::default()
        };
        let records = vec![done];
        assert_eq!(filter_returns(&records, "", ViewId::Table).len(), 1);
        for view in [ViewId::Step1, ViewId::Step2, ViewId::Step3, ViewId::Step4] {
            assert!(filter_returns(&records, "", view).is_empty());
        }
    }

    #[test]
    fn test_payment_search_fields() {
        let payments = vec![
            TransporterPayment {
                transporter_name: "Fast Movers".into(),
                payment_number: "PAY-2024-1001".into(),
                vehicle_number: "GJ01".into(),
                from_location: "Surat".into(),
                ..Default::default()
            },
            TransporterPayment {
                transporter_name: "Blue Dart".into(),
                ..Default::default()
            },
        ];
        assert_eq!(filter_payments(&payments, "gj01").len(), 1);
        assert_eq!(filter_payments(&payments, "pay-2024").len(), 1);
        // from_location is not searchable
        assert!(filter_payments(&payments, "surat").is_empty());
        assert!(filter_payments(&payments, "  ").is_empty());
    }
}
