use jiff::civil::Date;
use rust_decimal::Decimal;

/// Format a monetary amount as Brazilian Real, e.g. `R$ 1.234,56`.
pub fn format_brl(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((&*text, "00"));

    let mut grouped = String::new();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}R$ {grouped},{frac_part}")
}

/// Parse the date portion of an ERP date string (`YYYY-MM-DD`, possibly
/// followed by a time component).
fn parse_erp_date(value: &str) -> Option<Date> {
    let date_part = value.get(..10)?;
    Date::strptime("%Y-%m-%d", date_part).ok()
}

/// `dd/mm/yyyy` for table cells, with a placeholder when the date is
/// absent or not parseable.
pub fn format_date(value: Option<&str>) -> String {
    value
        .and_then(parse_erp_date)
        .map(|date| date.strftime("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// `dd/mm` label used to group chart points. An unparseable date keeps its
/// raw text so distinct inputs still form distinct groups.
pub fn short_date_label(value: &str) -> String {
    parse_erp_date(value)
        .map(|date| date.strftime("%d/%m").to_string())
        .unwrap_or_else(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    #[test]
    fn formats_real_amounts() {
        assert_eq!(format_brl(Decimal::ZERO), "R$ 0,00");
        assert_eq!(format_brl(dec("1234.5")), "R$ 1.234,50");
        assert_eq!(format_brl(dec("1000000")), "R$ 1.000.000,00");
        assert_eq!(format_brl(dec("116.666")), "R$ 116,67");
        assert_eq!(format_brl(dec("-5")), "-R$ 5,00");
    }

    #[test]
    fn formats_table_dates() {
        assert_eq!(format_date(Some("2024-08-01")), "01/08/2024");
        assert_eq!(format_date(Some("2024-08-01 10:30:00")), "01/08/2024");
        assert_eq!(format_date(Some("amanhã")), "-");
        assert_eq!(format_date(None), "-");
    }

    #[test]
    fn short_labels_keep_unparseable_text() {
        assert_eq!(short_date_label("2024-08-01"), "01/08");
        assert_eq!(short_date_label("???"), "???");
    }
}
