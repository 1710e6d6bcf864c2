use anyhow::Result;

use wayfinder_routes::{
    ActionCall, HttpVerb, RouteDefinition, RouteFormDefinition, RouteQueryOptions, RouteTable,
};

use crate::Target;
use crate::commands::pick;
use crate::config::Config;
use crate::params;

pub fn url(
    table: &RouteTable,
    config: &Config,
    target: &Target,
    verb: Option<HttpVerb>,
    json: bool,
) -> Result<()> {
    let definition = definition(table, config, target, verb)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&definition)?);
    } else {
        println!("{}", definition.url);
    }
    Ok(())
}

pub fn form(
    table: &RouteTable,
    config: &Config,
    target: &Target,
    verb: Option<HttpVerb>,
) -> Result<()> {
    let form = form_definition(table, config, target, verb)?;
    println!("{}", serde_json::to_string_pretty(&form)?);
    Ok(())
}

fn definition(
    table: &RouteTable,
    config: &Config,
    target: &Target,
    verb: Option<HttpVerb>,
) -> Result<RouteDefinition> {
    let action = pick(table, &target.route, target.template.as_deref())?;
    let args = params::route_args(&target.values, &target.params)?;
    let call = bind(action.with(&config.context), target)?;

    let definition = match verb {
        Some(verb) => call.verb(verb, args)?,
        None => call.call(args)?,
    };
    tracing::debug!(route = %target.route, url = %definition.url, "built url");
    Ok(definition)
}

fn form_definition(
    table: &RouteTable,
    config: &Config,
    target: &Target,
    verb: Option<HttpVerb>,
) -> Result<RouteFormDefinition> {
    let action = pick(table, &target.route, target.template.as_deref())?;
    let args = params::route_args(&target.values, &target.params)?;
    let form = bind(action.with(&config.context), target)?.form();

    let definition = match verb {
        Some(verb) => form.verb(verb, args)?,
        None => form.submit(args)?,
    };
    tracing::debug!(route = %target.route, action = %definition.action, "built form");
    Ok(definition)
}

/// Apply the target's `--query` pairs, replacing or merging.
///
/// `--merge` without pairs still carries the configured current query.
fn bind<'a>(call: ActionCall<'a>, target: &Target) -> Result<ActionCall<'a>> {
    if target.query.is_empty() && !target.merge {
        return Ok(call);
    }
    let query = params::query_map(&target.query)?;
    let options = if target.merge {
        RouteQueryOptions::merge(query)
    } else {
        RouteQueryOptions::query(query)
    };
    Ok(call.options(options))
}
