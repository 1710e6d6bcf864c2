use anyhow::{Result, bail};

use wayfinder_routes::{Action, RouteTable};

pub fn execute(table: &RouteTable, controller: Option<&str>) -> Result<()> {
    let actions: Vec<&Action> = match controller {
        Some(name) => match table.controller(name) {
            Some(c) => c.actions().iter().collect(),
            None => bail!("unknown controller `{name}`"),
        },
        None => table.actions().collect(),
    };

    for line in render(&actions) {
        println!("{line}");
    }
    tracing::debug!(count = actions.len(), "listed routes");
    Ok(())
}

/// One aligned line per action: verbs, URL template, action, name.
fn render(actions: &[&Action]) -> Vec<String> {
    let rows: Vec<[String; 4]> = actions
        .iter()
        .map(|a| {
            [
                a.definition()
                    .methods
                    .iter()
                    .map(|v| v.as_upper())
                    .collect::<Vec<_>>()
                    .join("|"),
                a.url_template().to_string(),
                format!("{}@{}", a.short_controller(), a.method()),
                a.name().unwrap_or("").to_string(),
            ]
        })
        .collect();

    let mut widths = [0usize; 3];
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    rows.iter()
        .map(|[verbs, url, action, name]| {
            format!(
                "{verbs:<w0$}  {url:<w1$}  {action:<w2$}  {name}",
                w0 = widths[0],
                w1 = widths[1],
                w2 = widths[2],
            )
            .trim_end()
            .to_string()
        })
        .collect()
}
