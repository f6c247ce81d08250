/// Renders a whole-rupee amount with lakh/crore digit grouping, e.g. `1,23,45,678`.
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_indian(&digits);
    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

pub fn format_inr_with_symbol(amount: f64) -> String {
    format!("₹{}", format_inr(amount))
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    let lead = head.len() % 2;
    if lead == 1 {
        out.push_str(&head[..1]);
    }
    for (i, pair) in head.as_bytes()[lead..].chunks(2).enumerate() {
        if i > 0 || lead == 1 {
            out.push(',');
        }
        out.extend(pair.iter().map(|b| char::from(*b)));
    }
    out.push(',');
    out.push_str(tail);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_lakhs_and_crores() {
        assert_eq!(format_inr(0.0), "0");
        assert_eq!(format_inr(999.0), "999");
        assert_eq!(format_inr(1_000.0), "1,000");
        assert_eq!(format_inr(10_000.0), "10,000");
        assert_eq!(format_inr(100_000.0), "1,00,000");
        assert_eq!(format_inr(1_161_695.0), "11,61,695");
        assert_eq!(format_inr(12_345_678.0), "1,23,45,678");
        assert_eq!(format_inr(123_456_789.0), "12,34,56,789");
    }

    #[test]
    fn rounds_and_keeps_sign() {
        assert_eq!(format_inr(310_584.82), "3,10,585");
        assert_eq!(format_inr(-250_000.0), "-2,50,000");
        assert_eq!(format_inr(-0.2), "0");
    }

    #[test]
    fn symbol_prefix_and_non_finite_passthrough() {
        assert_eq!(format_inr_with_symbol(600_000.0), "₹6,00,000");
        assert_eq!(format_inr(f64::INFINITY), "inf");
    }
}
