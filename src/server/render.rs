//! HTML rendering of the processed roster

use std::fmt::Write;

use crate::data::Employee;

/// Escapes text for use in HTML element content and attribute values
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Formats whole dollars with thousands separators, e.g. `$9,300`
fn format_dollars(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Renders the full page for a processed roster
pub fn render_roster(employees: &[Employee]) -> String {
    let eligible = employees.iter().filter(|e| e.hsa_eligible).count();

    let mut rows = String::new();
    for employee in employees {
        let class = if employee.hsa_eligible { "eligible" } else { "ineligible" };
        let eligible_label = if employee.hsa_eligible { "Yes" } else { "No" };

        // Writing to a String cannot fail
        let _ = writeln!(rows, "      <tr class=\"{}\">", class);
        let _ = writeln!(rows, "        <td>{}</td>", escape_html(&employee.name));
        let _ = writeln!(rows, "        <td>{}</td>", escape_html(&employee.plan_type));
        let _ = writeln!(
            rows,
            "        <td class=\"num\">{}</td>",
            format_dollars(employee.deductible)
        );
        let _ = writeln!(rows, "        <td>{}</td>", escape_html(&employee.date_of_birth));
        let _ = writeln!(rows, "        <td>{}</td>", eligible_label);
        let _ = writeln!(
            rows,
            "        <td class=\"num\">{}</td>",
            format_dollars(employee.hsa_max_contribution)
        );
        let _ = writeln!(rows, "      </tr>");
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>HSA Eligibility</title>
  <style>
    body {{ font-family: sans-serif; margin: 2rem; }}
    table {{ border-collapse: collapse; }}
    th, td {{ border: 1px solid #ccc; padding: 0.4rem 0.8rem; text-align: left; }}
    td.num {{ text-align: right; }}
    tr.ineligible {{ color: #888; }}
  </style>
</head>
<body>
  <h1>HSA Eligibility and Contribution Limits</h1>
  <p class="summary">{eligible} of {total} employees eligible</p>
  <table>
    <thead>
      <tr>
        <th>Name</th>
        <th>Plan Type</th>
        <th>Deductible</th>
        <th>Date of Birth</th>
        <th>HSA Eligible</th>
        <th>Max Contribution</th>
      </tr>
    </thead>
    <tbody>
{rows}    </tbody>
  </table>
</body>
</html>
"#,
        eligible = eligible,
        total = employees.len(),
        rows = rows,
    )
}
