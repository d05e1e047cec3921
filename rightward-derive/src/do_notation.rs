//! Implementation of `#[do_notation]`, `#[do_for(..)]` and `#[do_all]`.
//!
//! A method opts into do-notation by taking a parameter whose type is
//! `Scope`. Instrumenting it removes that parameter from the signature and
//! wraps the body in a boundary:
//!
//! ```text
//! fn total(&self, a: A, scope: Scope) -> R { body }
//!
//! // becomes
//!
//! fn total(&self, a: A) -> R {
//!     ::rightward::do_notation::run::<R, _>(move |scope| {
//!         return ::core::result::Result::Ok({ body });
//!     })
//! }
//! ```
//!
//! `return value` statements inside the body are rewritten to
//! `return Ok(value)`; closures, async blocks and nested items keep their own
//! `return` semantics and are left untouched.
//!
//! With `with = other`, an explicit-scope variant is emitted next to the
//! entry point. It keeps the `Scope` parameter, properly typed, and returns
//! `Result<R, Halt>` so a caller inside another block can forward its own
//! scope and propagate the halt with `?`.

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{ToTokens, quote};
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::visit_mut::{self, VisitMut};
use syn::{
    Attribute, Block, Expr, FnArg, GenericParam, Ident, ImplItem, Item, ItemFn, Lifetime,
    LifetimeParam, Pat, ReturnType, Signature, Token, TraitItem, TraitItemFn, Type, Visibility,
    parse_quote,
};

const SCOPE_LIFETIME: &str = "'__rightward_scope";

#[derive(Default)]
struct Options {
    with: Option<Ident>,
    vis: Option<Visibility>,
}

struct Target {
    name: Ident,
    vis: Option<Visibility>,
}

impl Parse for Target {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let name = input.parse()?;
        let vis = if input.peek(Token![:]) {
            input.parse::<Token![:]>()?;
            Some(input.parse()?)
        } else {
            None
        };
        Ok(Self { name, vis })
    }
}

/// Which methods of a block get instrumented.
enum Selection {
    All,
    Named(Vec<Target>),
}

pub fn do_notation_impl(attribute: TokenStream, item: TokenStream) -> TokenStream {
    expand_do_notation(attribute.into(), item.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

pub fn do_for_impl(attribute: TokenStream, item: TokenStream) -> TokenStream {
    expand_do_for(attribute.into(), item.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

pub fn do_all_impl(attribute: TokenStream, item: TokenStream) -> TokenStream {
    expand_do_all(attribute.into(), item.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_do_notation(attribute: TokenStream2, item: TokenStream2) -> syn::Result<TokenStream2> {
    let options = parse_options(attribute)?;

    if let Ok(function) = syn::parse2::<ItemFn>(item.clone()) {
        let generated = instrument(
            &function.attrs,
            Some(&function.vis),
            &function.sig,
            Some(&function.block),
            &options,
        )?;
        return Ok(quote! { #(#generated)* });
    }

    let method: TraitItemFn = syn::parse2(item)?;
    if options.vis.is_some() {
        return Err(syn::Error::new(
            method.sig.ident.span(),
            "trait methods cannot override their visibility",
        ));
    }
    let generated = instrument(
        &method.attrs,
        None,
        &method.sig,
        method.default.as_ref(),
        &options,
    )?;
    Ok(quote! { #(#generated)* })
}

fn expand_do_for(attribute: TokenStream2, item: TokenStream2) -> syn::Result<TokenStream2> {
    let parser = Punctuated::<Target, Token![,]>::parse_terminated;
    let targets = syn::parse::Parser::parse2(parser, attribute)?;
    if targets.is_empty() {
        return Err(syn::Error::new(
            Span::call_site(),
            "do_for requires at least one method name",
        ));
    }
    expand_block(item, Selection::Named(targets.into_iter().collect()))
}

fn expand_do_all(attribute: TokenStream2, item: TokenStream2) -> syn::Result<TokenStream2> {
    if !attribute.is_empty() {
        return Err(syn::Error::new(
            attribute.span(),
            "do_all takes no arguments; use do_for to pick methods",
        ));
    }
    expand_block(item, Selection::All)
}

fn parse_options(attribute: TokenStream2) -> syn::Result<Options> {
    let mut options = Options::default();
    let parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("with") {
            options.with = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("vis") {
            options.vis = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported do_notation option; expected `with` or `vis`"))
        }
    });
    syn::parse::Parser::parse2(parser, attribute)?;
    Ok(options)
}

fn expand_block(item: TokenStream2, selection: Selection) -> syn::Result<TokenStream2> {
    let mut item: Item = syn::parse2(item)?;
    let mut found: Vec<Ident> = Vec::new();

    match &mut item {
        Item::Impl(block) => {
            let mut items = Vec::with_capacity(block.items.len());
            for member in std::mem::take(&mut block.items) {
                let ImplItem::Fn(method) = &member else {
                    items.push(member);
                    continue;
                };
                let Some(options) =
                    select(&selection, &method.attrs, &method.sig, &mut found)
                else {
                    items.push(member);
                    continue;
                };
                for generated in instrument(
                    &method.attrs,
                    Some(&method.vis),
                    &method.sig,
                    Some(&method.block),
                    &options,
                )? {
                    items.push(syn::parse2(generated)?);
                }
            }
            block.items = items;
        }
        Item::Trait(block) => {
            let mut items = Vec::with_capacity(block.items.len());
            for member in std::mem::take(&mut block.items) {
                let TraitItem::Fn(method) = &member else {
                    items.push(member);
                    continue;
                };
                let Some(options) =
                    select(&selection, &method.attrs, &method.sig, &mut found)
                else {
                    items.push(member);
                    continue;
                };
                if options.vis.is_some() {
                    return Err(syn::Error::new(
                        method.sig.ident.span(),
                        "trait methods cannot override their visibility",
                    ));
                }
                for generated in instrument(
                    &method.attrs,
                    None,
                    &method.sig,
                    method.default.as_ref(),
                    &options,
                )? {
                    items.push(syn::parse2(generated)?);
                }
            }
            block.items = items;
        }
        other => {
            return Err(syn::Error::new(
                other.span(),
                "do_for and do_all apply to impl blocks and traits",
            ));
        }
    }

    if let Selection::Named(targets) = &selection {
        if let Some(missing) = targets.iter().find(|target| !found.contains(&target.name)) {
            return Err(syn::Error::new(
                missing.name.span(),
                format!("no method named `{}` in this block", missing.name),
            ));
        }
    }

    Ok(item.into_token_stream())
}

/// Decides whether a method is instrumented by a block attribute and with
/// which options.
fn select(
    selection: &Selection,
    attrs: &[Attribute],
    signature: &Signature,
    found: &mut Vec<Ident>,
) -> Option<Options> {
    let target = match selection {
        Selection::All => None,
        Selection::Named(targets) => {
            let target = targets.iter().find(|target| target.name == signature.ident)?;
            found.push(signature.ident.clone());
            Some(target)
        }
    };

    if attrs.iter().any(is_do_notation_attribute) {
        return None;
    }
    if target.is_none() && scope_parameter(signature).is_none() {
        return None;
    }

    Some(Options {
        with: None,
        vis: target.and_then(|target| target.vis.clone()),
    })
}

fn is_do_notation_attribute(attribute: &Attribute) -> bool {
    attribute
        .path()
        .segments
        .last()
        .is_some_and(|segment| segment.ident == "do_notation")
}

/// Accepts `Scope` as imported from the prelude, or spelled out as
/// `rightward::do_notation::Scope` / `rightward::prelude::Scope` (with or
/// without a leading `::`). Other paths ending in `Scope` are ordinary
/// parameters.
fn is_scope_type(ty: &Type) -> bool {
    match ty {
        Type::Path(path) if path.qself.is_none() => {
            let segments: Vec<String> = path
                .path
                .segments
                .iter()
                .map(|segment| segment.ident.to_string())
                .collect();
            match segments.as_slice() {
                [last] => last == "Scope" && path.path.leading_colon.is_none(),
                [krate, module, last] => {
                    krate == "rightward"
                        && (module == "do_notation" || module == "prelude")
                        && last == "Scope"
                }
                _ => false,
            }
        }
        Type::Paren(inner) => is_scope_type(&inner.elem),
        Type::Group(inner) => is_scope_type(&inner.elem),
        _ => false,
    }
}

/// Index and binding pattern of the `Scope` parameter.
fn scope_parameter(signature: &Signature) -> Option<(usize, Pat)> {
    signature
        .inputs
        .iter()
        .enumerate()
        .find_map(|(index, input)| match input {
            FnArg::Typed(typed) if is_scope_type(&typed.ty) => Some((index, (*typed.pat).clone())),
            _ => None,
        })
}

fn instrument(
    attrs: &[Attribute],
    vis: Option<&Visibility>,
    signature: &Signature,
    block: Option<&Block>,
    options: &Options,
) -> syn::Result<Vec<TokenStream2>> {
    let Some((index, pattern)) = scope_parameter(signature) else {
        return Err(syn::Error::new(
            signature.ident.span(),
            format!(
                "`{}` needs a parameter of type `Scope` to use do-notation",
                signature.ident
            ),
        ));
    };
    if signature
        .inputs
        .iter()
        .filter(|input| matches!(input, FnArg::Typed(typed) if is_scope_type(&typed.ty)))
        .count()
        > 1
    {
        return Err(syn::Error::new(
            signature.ident.span(),
            "do-notation accepts exactly one `Scope` parameter",
        ));
    }
    if let Some(asyncness) = &signature.asyncness {
        return Err(syn::Error::new(
            asyncness.span(),
            "do-notation does not support async functions",
        ));
    }
    let ReturnType::Type(_, returned) = &signature.output else {
        return Err(syn::Error::new(
            signature.ident.span(),
            "do-notation needs a right-biased return type",
        ));
    };

    let vis = options.vis.as_ref().or(vis);
    let body = block.map(|block| {
        let mut block = block.clone();
        ReturnRewriter.visit_block_mut(&mut block);
        block
    });

    let mut entry_signature = signature.clone();
    entry_signature.inputs = signature
        .inputs
        .iter()
        .enumerate()
        .filter(|(position, _)| *position != index)
        .map(|(_, input)| input.clone())
        .collect();

    let run = match returned.as_ref() {
        Type::ImplTrait(_) => quote! { ::rightward::do_notation::run },
        returned => quote! { ::rightward::do_notation::run::<#returned, _> },
    };

    let mut generated = vec![match &body {
        Some(body) => quote! {
            #(#attrs)*
            #vis #entry_signature {
                #run(move |#pattern| {
                    #[allow(unreachable_code, clippy::needless_return)]
                    return ::core::result::Result::Ok(#body);
                })
            }
        },
        None => quote! {
            #(#attrs)*
            #vis #entry_signature;
        },
    }];

    if let Some(name) = &options.with {
        if let Type::ImplTrait(_) = returned.as_ref() {
            return Err(syn::Error::new(
                name.span(),
                "`with` needs a concrete return type to name the halt type",
            ));
        }
        let explicit_signature = explicit_signature(signature, index, name, returned);
        generated.push(match &body {
            Some(body) => quote! {
                #(#attrs)*
                #vis #explicit_signature {
                    #[allow(unreachable_code, clippy::needless_return)]
                    return ::core::result::Result::Ok(#body);
                }
            },
            None => quote! {
                #(#attrs)*
                #vis #explicit_signature;
            },
        });
    }

    Ok(generated)
}

fn explicit_signature(signature: &Signature, index: usize, name: &Ident, returned: &Type) -> Signature {
    let lifetime = Lifetime::new(SCOPE_LIFETIME, Span::call_site());
    let left: Type = parse_quote! { <#returned as ::rightward::typeclass::RightBiased>::Left };

    let mut explicit = signature.clone();
    explicit.ident = name.clone();
    explicit
        .generics
        .params
        .insert(0, GenericParam::Lifetime(LifetimeParam::new(lifetime.clone())));
    if let Some(FnArg::Typed(typed)) = explicit.inputs.iter_mut().nth(index) {
        typed.ty = Box::new(parse_quote! {
            ::rightward::do_notation::Scope<#lifetime, #left>
        });
    }
    explicit.output = parse_quote! {
        -> ::core::result::Result<#returned, ::rightward::do_notation::Halt<#lifetime, #left>>
    };
    explicit
}

/// Rewrites `return value` into `return Ok(value)` for the boundary closure.
struct ReturnRewriter;

impl VisitMut for ReturnRewriter {
    fn visit_expr_mut(&mut self, expression: &mut Expr) {
        match expression {
            Expr::Closure(_) | Expr::Async(_) => {}
            Expr::Return(statement) => {
                if let Some(value) = statement.expr.as_mut() {
                    self.visit_expr_mut(value);
                }
                let value = statement
                    .expr
                    .take()
                    .map_or_else(|| quote! { () }, |value| quote! { #value });
                statement.expr = Some(Box::new(parse_quote! {
                    ::core::result::Result::Ok(#value)
                }));
            }
            _ => visit_mut::visit_expr_mut(self, expression),
        }
    }

    fn visit_item_mut(&mut self, _item: &mut Item) {}
}
