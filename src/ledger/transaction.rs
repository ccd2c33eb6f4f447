//! Audit-history queries and summaries

use bigdecimal::BigDecimal;

use crate::types::*;

/// Totals derived from one account's audit history.
///
/// Front-ends use this to render statement footers without walking the
/// history themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySummary {
    pub record_count: usize,
    pub total_deposited: BigDecimal,
    pub total_withdrawn: BigDecimal,
    pub total_sent: BigDecimal,
    pub total_received: BigDecimal,
}

/// Summarize an audit history.
///
/// The opening deposit counts toward `total_deposited`; PIN changes and
/// balance inquiries affect only the record count.
pub fn summarize(history: &[Transaction]) -> HistorySummary {
    let mut summary = HistorySummary {
        record_count: history.len(),
        total_deposited: BigDecimal::from(0),
        total_withdrawn: BigDecimal::from(0),
        total_sent: BigDecimal::from(0),
        total_received: BigDecimal::from(0),
    };

    for record in history {
        match record.kind {
            TransactionKind::AccountCreation | TransactionKind::Deposit => {
                summary.total_deposited += &record.amount;
            }
            TransactionKind::Withdrawal => {
                summary.total_withdrawn += &record.amount;
            }
            TransactionKind::TransferSent => {
                summary.total_sent += &record.amount;
            }
            TransactionKind::TransferReceived => {
                summary.total_received += &record.amount;
            }
            TransactionKind::PinChange | TransactionKind::BalanceInquiry => {}
        }
    }

    summary
}

/// Records of one kind, in insertion order
pub fn records_of_kind(history: &[Transaction], kind: TransactionKind) -> Vec<&Transaction> {
    history.iter().filter(|r| r.kind == kind).collect()
}

/// Records involving the given counterparty account, in insertion order
pub fn records_with_counterparty<'a>(
    history: &'a [Transaction],
    account_number: &str,
) -> Vec<&'a Transaction> {
    history
        .iter()
        .filter(|r| r.counterparty.as_deref() == Some(account_number))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: TransactionKind, amount: i64, counterparty: Option<&str>) -> Transaction {
        Transaction::new(
            kind,
            BigDecimal::from(amount),
            counterparty.map(str::to_string),
            BigDecimal::from(0),
        )
    }

    #[test]
    fn summary_buckets_amounts_by_kind() {
        let history = vec![
            record(TransactionKind::AccountCreation, 1000, None),
            record(TransactionKind::Deposit, 500, None),
            record(TransactionKind::Withdrawal, 200, None),
            record(TransactionKind::TransferSent, 300, Some("17")),
            record(TransactionKind::TransferReceived, 50, Some("17")),
            record(TransactionKind::PinChange, 0, None),
        ];

        let summary = summarize(&history);
        assert_eq!(summary.record_count, 6);
        assert_eq!(summary.total_deposited, BigDecimal::from(1500));
        assert_eq!(summary.total_withdrawn, BigDecimal::from(200));
        assert_eq!(summary.total_sent, BigDecimal::from(300));
        assert_eq!(summary.total_received, BigDecimal::from(50));
    }

    #[test]
    fn filters_by_kind_and_counterparty() {
        let history = vec![
            record(TransactionKind::AccountCreation, 1000, None),
            record(TransactionKind::TransferSent, 300, Some("17")),
            record(TransactionKind::TransferSent, 100, Some("42")),
        ];

        let sent = records_of_kind(&history, TransactionKind::TransferSent);
        assert_eq!(sent.len(), 2);

        let with_17 = records_with_counterparty(&history, "17");
        assert_eq!(with_17.len(), 1);
        assert_eq!(with_17[0].amount, BigDecimal::from(300));
    }

    #[test]
    fn empty_history_summarizes_to_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary.record_count, 0);
        assert_eq!(summary.total_deposited, BigDecimal::from(0));
    }
}
