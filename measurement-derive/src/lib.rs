//! Derive macro implementation used by `measurement-core`.
//!
//! `measurement-derive` is an implementation detail of this workspace. The `Unit` derive expands in terms of
//! `crate::Unit` and `crate::Ratio`, so it is intended to be used by `measurement-core` (or by crates that expose an
//! identical crate-root API).
//!
//! Most users should depend on `measurement` instead and use the predefined units.
//!
//! # Generated impls
//!
//! For a unit marker type `MyUnit`, the derive implements `crate::Unit for MyUnit`. Formatting comes from the blanket
//! `Display` impl on `Quantity`.
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `symbol = "h"`: displayed unit symbol (required)
//! - `dimension = Time`: type-level dimension (required)
//! - `ratio = (36, 10)`: rational scale as `(numerator, denominator)`, or a single integer expression; defaults to `1`
//! - `exponent = 3`: power-of-ten exponent; defaults to `0`
//!
//! Each key may appear once; unknown, repeated or missing required keys are compile errors.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, Ident, LitStr, Token, Type,
};

/// Derive `crate::Unit` for a zero-sized marker type.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing at least `symbol` and `dimension`.
///
/// This macro is intended for use by `measurement-core`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let symbol = &unit_attr.symbol;
    let dimension = &unit_attr.dimension;
    let exponent = &unit_attr.exponent;
    let ratio = match &unit_attr.ratio {
        Ratio::Fraction(num, den) => quote! { crate::Ratio::new(#num, #den) },
        Ratio::Whole(num) => quote! { crate::Ratio::new(#num, 1) },
        Ratio::One => quote! { crate::Ratio::ONE },
    };

    let expanded = quote! {
        impl crate::Unit for #name {
            const RATIO: crate::Ratio = #ratio;
            const EXPONENT: i32 = #exponent;
            type Dim = #dimension;
            const SYMBOL: &'static str = #symbol;
        }
    };

    Ok(expanded)
}

/// Rational scale as written in the attribute.
enum Ratio {
    Fraction(Expr, Expr),
    Whole(Expr),
    One,
}

impl Parse for Ratio {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        match input.parse::<Expr>()? {
            Expr::Tuple(tuple) => {
                let mut elems = tuple.elems.into_iter();
                match (elems.next(), elems.next(), elems.next()) {
                    (Some(num), Some(den), None) => Ok(Ratio::Fraction(num, den)),
                    _ => Err(input.error("`ratio` tuple must be `(numerator, denominator)`")),
                }
            }
            Expr::Paren(paren) => Ok(Ratio::Whole(*paren.expr)),
            other => Ok(Ratio::Whole(other)),
        }
    }
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    dimension: Type,
    ratio: Ratio,
    exponent: Expr,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut dimension: Option<Type> = None;
        let mut ratio: Option<Ratio> = None;
        let mut exponent: Option<Expr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            let key = ident.to_string();
            let duplicate = match key.as_str() {
                "symbol" => symbol.replace(input.parse()?).is_some(),
                "dimension" => dimension.replace(input.parse()?).is_some(),
                "ratio" => ratio.replace(input.parse()?).is_some(),
                "exponent" => exponent.replace(input.parse()?).is_some(),
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            };
            if duplicate {
                return Err(syn::Error::new(
                    ident.span(),
                    format!("duplicate attribute `{}`", key),
                ));
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let dimension = dimension.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimension`")
        })?;

        Ok(UnitAttribute {
            symbol,
            dimension,
            ratio: ratio.unwrap_or(Ratio::One),
            exponent: exponent.unwrap_or_else(|| syn::parse_quote!(0)),
        })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
}
