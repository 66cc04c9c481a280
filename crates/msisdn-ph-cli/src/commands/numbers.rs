use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use anyhow::Result;
use clap::{ArgAction, Args};
use msisdn_ph_core::dto::MsisdnDetailDto;
use msisdn_ph_core::{validate as validate_number, Msisdn, Operator};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    pub number: String,
}

#[derive(Debug, Args)]
pub struct InspectArgs {
    pub number: String,
}

#[derive(Debug, Args)]
pub struct FormatArgs {
    pub number: String,
    #[arg(long, action = ArgAction::SetTrue)]
    pub country_code: bool,
    #[arg(long, default_value = "", value_name = "SEP")]
    pub separator: String,
}

#[derive(Debug, Args)]
pub struct OperatorArgs {
    pub number: String,
}

#[derive(Debug, Serialize)]
struct ValidationDto {
    valid: bool,
}

#[derive(Debug, Serialize)]
struct FormattedDto {
    formatted: String,
}

#[derive(Debug, Serialize)]
struct OperatorDto {
    operator: Operator,
}

pub fn validate(ctx: &Context<'_>, args: ValidateArgs) -> Result<()> {
    if !validate_number(&args.number) {
        return Err(invalid_input(format!(
            "invalid mobile number: {:?}",
            args.number
        )));
    }
    if ctx.json {
        print_json(&ValidationDto { valid: true })
    } else {
        println!("valid");
        Ok(())
    }
}

pub fn inspect(ctx: &Context<'_>, args: InspectArgs) -> Result<()> {
    let msisdn = parse_number(ctx, &args.number)?;
    let detail = MsisdnDetailDto::from(&msisdn);
    if ctx.json {
        return print_json(&detail);
    }
    println!("msisdn: {}", detail.msisdn);
    println!("prefix: {}", detail.prefix);
    println!("operator: {}", msisdn.operator());
    println!("local: {}", detail.local);
    println!("international: {}", detail.international);
    Ok(())
}

pub fn format(ctx: &Context<'_>, args: FormatArgs) -> Result<()> {
    let msisdn = parse_number(ctx, &args.number)?;
    let formatted = msisdn.get(args.country_code, &args.separator);
    if ctx.json {
        return print_json(&FormattedDto { formatted });
    }
    println!("{}", formatted);
    Ok(())
}

pub fn operator(ctx: &Context<'_>, args: OperatorArgs) -> Result<()> {
    let msisdn = parse_number(ctx, &args.number)?;
    if ctx.json {
        return print_json(&OperatorDto {
            operator: msisdn.operator(),
        });
    }
    println!("{}", msisdn.operator());
    Ok(())
}

fn parse_number(ctx: &Context<'_>, raw: &str) -> Result<Msisdn> {
    let mut msisdn = Msisdn::with_table(raw, &ctx.config.table)?;
    msisdn.set_country_prefix(&ctx.config.country_prefix);
    Ok(msisdn)
}
