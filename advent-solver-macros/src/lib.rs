//! Procedural macros for the advent-solver framework

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Lit, parse_macro_input};

/// Derive macro for automatically registering solvers with the plugin system.
///
/// Generates an `inventory::submit!` of a `SolverPlugin` so the solver is
/// discovered by `RegistryBuilder::register_all_plugins`.
///
/// # Attributes
///
/// - `year`: Required. The Advent of Code year (e.g. 2015)
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. Array of string literals for filtering (e.g. `["easy"]`)
///
/// # Requirements
///
/// The type must implement the `Solver` trait; if it doesn't, the generated
/// bound check produces a clear `E0277` at the struct definition.
///
/// # Example
///
/// ```ignore
/// use advent_solver::{AutoRegisterSolver, Solver};
///
/// #[derive(AutoRegisterSolver)]
/// #[aoc(year = 2015, day = 1, tags = ["easy"])]
/// struct Day1;
///
/// impl Solver for Day1 {
///     // ... implementation
/// }
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(aoc))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    let aoc_attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc"))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                name,
                "AutoRegisterSolver requires an #[aoc(year = ..., day = ...)] attribute",
            )
        })?;

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    aoc_attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                year = Some(lit_int.base10_parse()?);
            } else {
                return Err(meta.error("'year' must be an integer literal"));
            }
        } else if meta.path.is_ident("day") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                day = Some(lit_int.base10_parse()?);
            } else {
                return Err(meta.error("'day' must be an integer literal"));
            }
        } else if meta.path.is_ident("tags") {
            // tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                let lit: Lit = content.parse()?;
                if let Lit::Str(lit_str) = lit {
                    tags.push(lit_str.value());
                } else {
                    return Err(meta.error("'tags' entries must be string literals"));
                }
                if content.peek(syn::Token![,]) {
                    let _: syn::Token![,] = content.parse()?;
                }
            }
        } else {
            return Err(meta.error("unknown key; expected 'year', 'day', or 'tags'"));
        }
        Ok(())
    })?;

    let year = year
        .ok_or_else(|| syn::Error::new_spanned(aoc_attr, "missing required 'year' attribute"))?;
    let day =
        day.ok_or_else(|| syn::Error::new_spanned(aoc_attr, "missing required 'day' attribute"))?;

    let tag_strs = tags.iter().map(|s| s.as_str());
    let tags_array = quote! { &[#(#tag_strs),*] };

    Ok(quote! {
        // Compile-time check that the type implements the Solver trait, for a
        // clearer error than the one from the inventory submission below
        const _: () = {
            trait MustImplementSolver: ::advent_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::advent_solver::inventory::submit! {
            ::advent_solver::SolverPlugin {
                year: #year,
                day: #day,
                solver: &#name,
                tags: #tags_array,
            }
        }
    })
}
