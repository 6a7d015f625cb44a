//! `schemagen`: renders a small relational schema as ORM decorations.
//!
//! This binary plays the "value producer" role: it owns the schema model,
//! builds decoration requests from it, and asks `adorn` to render them. Run
//! with `--target annotation` to emit docblock annotations instead of
//! attributes, and `--multiline` for one-entry-per-line parameter lists.

use adorn::{to_value, Decoration, Renderer, Syntax, Value};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "schemagen", about = "Render an example schema as ORM decorations")]
struct Cli {
    /// Decoration syntax to emit.
    #[arg(long, value_enum, default_value_t = Target::Attribute)]
    target: Target,

    /// Lay out parameter lists one entry per line.
    #[arg(long)]
    multiline: bool,
}

#[derive(Copy, Clone, ValueEnum)]
enum Target {
    Attribute,
    Annotation,
}

struct Table {
    name: &'static str,
    indexes: Vec<IndexSpec>,
    columns: Vec<Column>,
}

// Serializable on purpose: index specs go through adorn's serde bridge
// instead of being assembled by hand.
#[derive(Serialize)]
struct IndexSpec {
    name: String,
    columns: Vec<String>,
}

struct Column {
    name: &'static str,
    kind: &'static str,
    length: Option<i64>,
    nullable: bool,
    unique: bool,
}

fn example_schema() -> Vec<Table> {
    vec![
        Table {
            name: "users",
            indexes: vec![
                IndexSpec {
                    name: "email_idx".into(),
                    columns: vec!["email".into()],
                },
                IndexSpec {
                    name: "status_idx".into(),
                    columns: vec!["status".into()],
                },
            ],
            columns: vec![
                Column {
                    name: "email",
                    kind: "string",
                    length: Some(255),
                    nullable: false,
                    unique: true,
                },
                Column {
                    name: "status",
                    kind: "string",
                    length: Some(32),
                    nullable: true,
                    unique: false,
                },
            ],
        },
        Table {
            name: "posts",
            indexes: vec![],
            columns: vec![Column {
                name: "title",
                kind: "string",
                length: Some(120),
                nullable: false,
                unique: false,
            }],
        },
    ]
}

fn table_decorations(table: &Table, multiline: bool) -> Result<Vec<Decoration>> {
    let mut entries = vec![("name".to_string(), Value::from(table.name))];
    if !table.indexes.is_empty() {
        let indexes = table
            .indexes
            .iter()
            .map(|spec| {
                Ok(Value::from(
                    Decoration::new(r"ORM\Index").with_content(to_value(spec)?),
                ))
            })
            .collect::<Result<Vec<_>>>()?;
        entries.push(("indexes".to_string(), Value::Seq(indexes)));
    }

    Ok(vec![
        Decoration::new(r"ORM\Entity"),
        Decoration::new(r"ORM\Table")
            .with_content(Value::Map(entries))
            .multiline(multiline),
    ])
}

fn column_decoration(column: &Column, multiline: bool) -> Decoration {
    let mut entries = vec![("type".to_string(), Value::from(column.kind))];
    if let Some(length) = column.length {
        entries.push(("length".to_string(), Value::from(length)));
    }
    entries.push(("nullable".to_string(), Value::from(column.nullable)));
    if column.unique {
        entries.push(("unique".to_string(), Value::from(true)));
    }
    Decoration::new(r"ORM\Column")
        .with_content(Value::Map(entries))
        .multiline(multiline)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let renderer = match cli.target {
        Target::Attribute => Renderer::new(Syntax::attribute()),
        Target::Annotation => Renderer::new(Syntax::annotation()),
    };

    for table in example_schema() {
        for decoration in table_decorations(&table, cli.multiline)? {
            println!("{}", renderer.render(&decoration)?);
        }
        println!("class {} {{", pascal_case(table.name));
        for column in &table.columns {
            println!("    {}", renderer.render(&column_decoration(column, cli.multiline))?);
            println!("    private ${};", column.name);
        }
        println!("}}\n");
    }
    Ok(())
}

fn pascal_case(name: &str) -> String {
    name.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}
