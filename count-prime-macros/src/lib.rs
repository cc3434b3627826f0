extern crate proc_macro;

use std::collections::{HashMap, HashSet};

use proc_macro::TokenStream;
use quote::{ToTokens, format_ident, quote};
use syn::{
    FnArg, ItemFn, Meta, Pat, ReturnType, Token, Visibility, parse_macro_input,
    punctuated::Punctuated,
};

/// Precalculate the running tally of a const predicate at compile time.
///
/// The annotated function must be a `const fn` taking a single integer
/// argument and returning `bool`. Next to it the macro generates
/// `<name>_prefix`, which returns how many values in `MIN..=x` satisfy the
/// predicate, read from a look-up table built during compilation. Tallies
/// are `usize`.
///
/// The range of the argument is given as `<argument> = <range>` and may
/// refer to constants in scope.
///
/// This macro supports two operating modes:
///  - **basic**: `<name>_prefix` returns the tally and panics if the input is outside the range.
///  - **option**: `<name>_prefix` returns an [Option]. [Some] if the input is in range, [None] if not.
///
/// Examples:
/// ```rust
/// use count_prime::prefix_table;
///
/// #[prefix_table(x = 0..=20)]
/// const fn is_even(x: u32) -> bool {
///     x % 2 == 0
/// }
///
/// const LOW: i64 = -5;
///
/// #[prefix_table(n = LOW..=5, option)]
/// const fn is_negative(n: i64) -> bool {
///     n < 0
/// }
///
/// fn main() {
///     assert_eq!(is_even_prefix(0), 1);
///     assert_eq!(is_even_prefix(9), 5);
///     assert!(is_even(4));
///
///     assert_eq!(is_negative_prefix(-5), Some(1));
///     assert_eq!(is_negative_prefix(5), Some(5));
///     assert_eq!(is_negative_prefix(6), None);
/// }
/// ```
#[proc_macro_attribute]
pub fn prefix_table(attr: TokenStream, item: TokenStream) -> TokenStream {
    let metas: Punctuated<Meta, Token![,]> =
        parse_macro_input!(attr with Punctuated::parse_terminated);

    #[derive(Debug, Hash, PartialEq, Eq)]
    enum Options {
        Option,
    }

    let mut options = HashSet::new();
    let mut range_map = HashMap::<String, proc_macro2::TokenStream>::new();
    for meta in metas {
        match meta {
            Meta::NameValue(mnv) => {
                let ident = mnv
                    .path
                    .get_ident()
                    .expect("Attribute key must be an identifier")
                    .to_string();
                let value_expr = mnv.value.into_token_stream();
                if range_map.insert(ident.clone(), value_expr).is_some() {
                    panic!("Duplicated key: {ident}");
                }
            }
            Meta::Path(opt) => {
                match opt.to_token_stream().to_string().trim() {
                    "option" => {
                        options.insert(Options::Option);
                    }
                    opt => panic!("Unknown option: {opt}"),
                };
            }
            _ => (),
        }
    }

    let mut func = parse_macro_input!(item as ItemFn);
    let visibility = func.vis.clone();
    let func_ident = func.sig.ident.clone();
    func.vis = Visibility::Public(syn::token::Pub::default());

    match &func.sig.output {
        ReturnType::Default => panic!("Function must have a return type."),
        ReturnType::Type(_, ty) => {
            if ty.to_token_stream().to_string() != "bool" {
                panic!("Predicate '{func_ident}' must return `bool`.");
            }
        }
    }

    let mut arg_info = Vec::new();
    for arg in &func.sig.inputs {
        if let FnArg::Typed(pat_type) = arg
            && let Pat::Ident(pat_ident) = &*pat_type.pat
        {
            let arg_name = pat_ident.ident.to_string();
            if let Some(range_expr) = range_map.get(&arg_name) {
                arg_info.push((
                    pat_ident.ident.clone(),
                    pat_type.ty.clone(),
                    range_expr.clone(),
                ));
            } else {
                panic!("Argument '{arg_name}' does not have a specified range.");
            }
        }
    }

    let [(ident, ty, range_expr)] = arg_info.as_slice() else {
        panic!(
            "Predicate '{func_ident}' must take exactly one argument, found {}.",
            func.sig.inputs.len()
        );
    };

    let upper_ident = ident.to_string().to_uppercase();
    let range_ident = format_ident!("{}_RANGE", upper_ident);
    let min_ident = format_ident!("{}_MIN", upper_ident);
    let max_ident = format_ident!("{}_MAX", upper_ident);
    let size_ident = format_ident!("{}_SIZE", upper_ident);
    let index_var = format_ident!("{}_idx", ident);

    let const_defs = quote! {
        const #range_ident: std::ops::RangeInclusive<#ty> = #range_expr;
        const #min_ident: #ty = *#range_ident.start();
        const #max_ident: #ty = *#range_ident.end();
        const #size_ident: usize = (#max_ident as isize - #min_ident as isize + 1) as usize;
    };

    let generate_table_fn = quote! {
        const fn generate_table() -> [usize; #size_ident] {
            let mut table = [0usize; #size_ident];
            let mut tally: usize = 0;
            let mut #index_var: usize = 0;
            while #index_var < #size_ident {
                let #ident = #min_ident + #index_var as #ty;
                if #func_ident(#ident) {
                    tally += 1;
                }
                table[#index_var] = tally;
                #index_var += 1;
            }
            table
        }
    };

    let table_ident = format_ident!("PREFIX_TABLE_{}", func_ident.to_string().to_uppercase());
    let prefix_fn_ident = format_ident!("{}_prefix", func_ident);

    let prefix_fn = {
        let mut return_ty = quote! { usize };
        let mut table_access = quote! { #table_ident[#index_var] };

        let opt_check = options.contains(&Options::Option).then(|| {
            return_ty = quote! { Option<usize> };
            table_access = quote! { Some(#table_access) };
            quote! {
                if !(#min_ident <= #ident && #ident <= #max_ident) {
                    return None;
                }
            }
        });

        quote! {
            pub const fn #prefix_fn_ident(#ident: #ty) -> #return_ty {
                #opt_check
                let #index_var = (#ident - #min_ident) as usize;
                #table_access
            }
        }
    };

    let mod_name = format_ident!("_mod_prefix_{}", func_ident);
    let expanded = quote! {

        mod #mod_name {

            use super::*;

            #func

            #const_defs

            #generate_table_fn

            pub const #table_ident: &'static [usize; #size_ident] = &generate_table();

            #prefix_fn
        }

        #[allow(unused_imports)]
        #visibility use #mod_name::{#func_ident, #prefix_fn_ident};
    };

    expanded.into()
}
