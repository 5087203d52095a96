//! Datasets the console can list: built-in samples or a JSON export.

use std::path::Path;

use anyhow::Context;
use bizgrid_core::{CellValue, GridRow, Record};
use bizgrid_grid::Column;
use chrono::{Days, NaiveDate};

/// Built-in sample listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    Suppliers,
    Orders,
}

impl Sample {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sample::Suppliers => "suppliers",
            Sample::Orders => "orders",
        }
    }

    pub fn records(&self) -> Vec<Record> {
        match self {
            Sample::Suppliers => suppliers(),
            Sample::Orders => sales_orders(130),
        }
    }

    pub fn columns(&self) -> Vec<Column<Record>> {
        match self {
            Sample::Suppliers => supplier_columns(),
            Sample::Orders => order_columns(),
        }
    }
}

impl core::str::FromStr for Sample {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "suppliers" => Ok(Sample::Suppliers),
            "orders" => Ok(Sample::Orders),
            other => anyhow::bail!("unknown sample dataset: {other}"),
        }
    }
}

/// A listing ready to mount: rows plus the columns to show them with.
#[derive(Debug)]
pub struct Dataset {
    pub name: String,
    pub records: Vec<Record>,
    pub columns: Vec<Column<Record>>,
}

impl Dataset {
    pub fn sample(sample: Sample) -> Self {
        Self {
            name: sample.as_str().to_string(),
            records: sample.records(),
            columns: sample.columns(),
        }
    }

    /// Load a JSON array of objects; every field becomes a sortable column.
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read dataset {}", path.display()))?;
        let value: serde_json::Value = serde_json::from_str(&raw)
            .with_context(|| format!("dataset {} is not valid JSON", path.display()))?;
        let records = Record::many_from_json(&value)
            .with_context(|| format!("dataset {} has an unexpected shape", path.display()))?;

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "dataset".to_string());

        Ok(Self {
            name,
            columns: infer_columns(&records),
            records,
        })
    }
}

/// One sortable column per distinct field, in key order.
pub fn infer_columns(records: &[Record]) -> Vec<Column<Record>> {
    let mut keys: Vec<&str> = records.iter().flat_map(Record::keys).collect();
    keys.sort_unstable();
    keys.dedup();
    keys.into_iter()
        .map(|key| Column::new(key, humanize(key)).sortable())
        .collect()
}

/// `totalSpent` / `total_spent` → `Total Spent`.
pub fn humanize(key: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    for ch in key.chars() {
        if ch == '_' || ch == '-' || ch == ' ' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        } else if ch.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
            current.push(ch);
        } else {
            current.push(ch);
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .into_iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn date(y: i32, m: u32, d: u32) -> CellValue {
    NaiveDate::from_ymd_opt(y, m, d).into()
}

fn suppliers() -> Vec<Record> {
    let rows: [(&str, &str, &str, &str, i64, f64, CellValue, bool); 12] = [
        ("Acme Supplies Inc.", "Dana Reyes", "dana@acme.test", "Chicago", 42, 32450.75, date(2019, 4, 2), true),
        ("TechParts Co.", "Lee Chen", "orders@techparts.test", "Austin", 31, 24680.50, date(2020, 9, 14), true),
        ("Global Metals", "Priya Nair", "priya@globalmetals.test", "Chicago", 18, 15750.25, date(2021, 1, 20), true),
        ("Northwind Packaging", "Sam Okafor", "sam@northwind.test", "Seattle", 27, 9820.00, date(2018, 11, 3), true),
        ("Blue River Textiles", "Ana Silva", "ana@blueriver.test", "Porto", 9, 4310.40, date(2022, 6, 8), false),
        ("Summit Office Supply", "Jordan Park", "jordan@summit.test", "Denver", 55, 18990.10, date(2017, 2, 27), true),
        ("Kestrel Electronics", "Mika Laine", "mika@kestrel.test", "Helsinki", 14, 27115.00, date(2023, 3, 15), true),
        ("Harbor Logistics", "Chris Doyle", "chris@harbor.test", "Boston", 7, 3120.85, date(2024, 8, 1), true),
        ("Verde Farms", "Lucia Romero", "lucia@verde.test", "Valencia", 22, 8450.00, date(2020, 5, 19), false),
        ("Ironclad Tools", "Ben Hart", "ben@ironclad.test", "Pittsburgh", 36, 21400.60, date(2019, 10, 10), true),
        ("Meridian Chemicals", "Noor Haddad", "noor@meridian.test", "Rotterdam", 11, 12875.30, date(2021, 12, 6), true),
        ("Pinecrest Paper", "Evan Brooks", "evan@pinecrest.test", "Portland", 19, 5600.00, date(2022, 2, 22), true),
    ];

    rows.into_iter()
        .map(|(name, contact, email, city, orders, total, since, active)| {
            Record::new()
                .with("name", name)
                .with("contact", contact)
                .with("email", email)
                .with("city", city)
                .with("orders", orders)
                .with("totalSpent", total)
                .with("since", since)
                .with("active", active)
        })
        .collect()
}

fn supplier_columns() -> Vec<Column<Record>> {
    vec![
        Column::new("name", "Supplier").sortable(),
        Column::computed("contact", "Contact", |row: &Record| {
            CellValue::text(format!("{} <{}>", row.cell("contact"), row.cell("email")))
        }),
        Column::new("city", "City").sortable(),
        Column::new("orders", "Orders").sortable(),
        Column::new("totalSpent", "Total Spent").sortable(),
        Column::new("since", "Supplier Since").sortable().hidden(),
        Column::new("active", "Active").hidden(),
    ]
}

fn sales_orders(n: usize) -> Vec<Record> {
    const CUSTOMERS: [&str; 6] = [
        "Contoso Retail",
        "Fabrikam Ltd.",
        "Wingtip Toys",
        "Litware Inc.",
        "Adatum Corp.",
        "Tailspin Traders",
    ];
    const STATUSES: [&str; 4] = ["draft", "confirmed", "shipped", "invoiced"];
    let start = NaiveDate::from_ymd_opt(2025, 1, 1);

    (1..=n)
        .map(|i| {
            let total = ((i * 7919) % 50_000) as f64 / 10.0 + 100.0;
            let paid = if i % 3 == 0 { total } else { (total / 2.0).floor() };
            let ordered = start.and_then(|d| d.checked_add_days(Days::new((i % 90) as u64)));
            Record::new()
                .with("number", format!("SO-{i:05}"))
                .with("customer", CUSTOMERS[i % CUSTOMERS.len()])
                .with("ordered", ordered)
                .with("status", STATUSES[i % STATUSES.len()])
                .with("total", total)
                .with("paid", paid)
        })
        .collect()
}

fn order_columns() -> Vec<Column<Record>> {
    vec![
        Column::new("number", "Order").sortable(),
        Column::new("customer", "Customer").sortable(),
        Column::new("ordered", "Ordered").sortable(),
        Column::new("status", "Status"),
        Column::new("total", "Total").sortable(),
        Column::computed("balance", "Balance Due", |row: &Record| {
            match (row.cell("total"), row.cell("paid")) {
                (CellValue::Number(total), CellValue::Number(paid)) => {
                    CellValue::Number(((total - paid) * 100.0).round() / 100.0)
                }
                _ => CellValue::Empty,
            }
        })
        .sortable(),
    ]
}
