//! Translation of a `FilterSpec` predicate tree into a SQL `WHERE` clause.
//!
//! Values are never interpolated; every literal becomes a `?` placeholder
//! with a matching entry in `SqlFilter::binds`.

use hireboard_types::filter::{FilterSpec, Predicate};

/// A bound parameter for a generated clause.
#[derive(Debug, Clone, PartialEq)]
pub enum Bind {
    Text(String),
    Real(f64),
}

/// A generated `WHERE` clause and its parameters, in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlFilter {
    pub clause: String,
    pub binds: Vec<Bind>,
}

impl SqlFilter {
    pub fn from_spec(spec: &FilterSpec) -> Self {
        let mut binds = Vec::new();
        let clause = render(&spec.predicate(), &mut binds);
        Self { clause, binds }
    }
}

fn render(predicate: &Predicate, binds: &mut Vec<Bind>) -> String {
    match predicate {
        Predicate::And(all) if all.is_empty() => "1 = 1".to_string(),
        Predicate::Or(any) if any.is_empty() => "1 = 0".to_string(),
        Predicate::And(all) => join(all, " AND ", binds),
        Predicate::Or(any) => join(any, " OR ", binds),
        Predicate::NameContains(q) => {
            binds.push(Bind::Text(format!("%{}%", escape_like(q))));
            "name LIKE ? ESCAPE '\\'".to_string()
        }
        Predicate::SkillsContain(q) => {
            binds.push(Bind::Text(q.clone()));
            "EXISTS (SELECT 1 FROM json_each(providers.skills) WHERE lower(json_each.value) = lower(?))"
                .to_string()
        }
        Predicate::StatusNotIn(statuses) if statuses.is_empty() => "1 = 1".to_string(),
        Predicate::StatusNotIn(statuses) => {
            let placeholders = vec!["?"; statuses.len()].join(", ");
            binds.extend(statuses.iter().map(|s| Bind::Text(s.to_string())));
            format!("status NOT IN ({placeholders})")
        }
        Predicate::RateAtLeast(v) => {
            binds.push(Bind::Real(*v));
            "hourly_rate >= ?".to_string()
        }
        Predicate::RateBelow(v) => {
            binds.push(Bind::Real(*v));
            "hourly_rate < ?".to_string()
        }
    }
}

fn join(parts: &[Predicate], separator: &str, binds: &mut Vec<Bind>) -> String {
    parts
        .iter()
        .map(|p| format!("({})", render(p, binds)))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Escape `LIKE` wildcards so user text matches literally.
fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
