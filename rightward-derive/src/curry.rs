//! Implementation of the `curry!` procedural macro.
//!
//! `Applicative::apply` feeds one argument at a time, so a multi-argument
//! function wrapped in a family has to be curried first.
//!
//! # Supported Input Forms
//!
//! 1. Closure form: `curry!(|a, b| body)`
//! 2. Function name + arity form: `curry!(function_name, arity)`
//!
//! # Generated Code Structure
//!
//! Nested `move` closures share the function and the arguments received so
//! far through `Rc`, so a partial application can be called repeatedly.
//! Earlier arguments are handed to the function with `Rc::unwrap_or_clone`.
//!
//! ```text
//! {
//!     let __rightward_function = Rc::new(|a, b| body);
//!     move |__rightward_argument_0| {
//!         let __rightward_function = Rc::clone(&__rightward_function);
//!         let __rightward_argument_0 = Rc::new(__rightward_argument_0);
//!         move |__rightward_argument_1| {
//!             __rightward_function(
//!                 Rc::unwrap_or_clone(Rc::clone(&__rightward_argument_0)),
//!                 __rightward_argument_1,
//!             )
//!         }
//!     }
//! }
//! ```

use proc_macro::TokenStream;
use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Expr, ExprClosure, ExprLit, ExprPath, Lit, Token};

enum CurryInput {
    Closure(ExprClosure),
    FunctionWithArity { function: ExprPath, arity: usize },
}

pub fn curry_impl(input: TokenStream) -> TokenStream {
    let expanded = match parse_curry_input(input.into()) {
        Ok(CurryInput::Closure(closure)) => curry_closure(&closure),
        Ok(CurryInput::FunctionWithArity { function, arity }) => {
            nested_closures(arity, &quote! { #function })
        }
        Err(error) => error.to_compile_error(),
    };

    TokenStream::from(expanded)
}

fn parse_curry_input(input: TokenStream2) -> syn::Result<CurryInput> {
    let parser = Punctuated::<Expr, Token![,]>::parse_terminated;
    let expressions = syn::parse::Parser::parse2(parser, input)?;
    let mut iterator = expressions.into_iter();

    match (iterator.next(), iterator.next(), iterator.next()) {
        (Some(Expr::Closure(closure)), None, None) => Ok(CurryInput::Closure(closure)),
        (Some(Expr::Path(path)), None, None) => Err(syn::Error::new(
            path.span(),
            "curry! with a function name requires an arity: curry!(function_name, 2)",
        )),
        (Some(Expr::Path(function)), Some(arity), None) => {
            let arity = parse_arity(&arity)?;
            if arity < 2 {
                return Err(syn::Error::new(
                    function.span(),
                    "curry! requires a function with at least 2 arguments",
                ));
            }
            Ok(CurryInput::FunctionWithArity { function, arity })
        }
        (Some(other), Some(_), None) => Err(syn::Error::new(
            other.span(),
            "expected a function name or path",
        )),
        _ => Err(syn::Error::new(
            Span::call_site(),
            "curry! requires a closure or a function name with arity",
        )),
    }
}

fn parse_arity(expression: &Expr) -> syn::Result<usize> {
    match expression {
        Expr::Lit(ExprLit {
            lit: Lit::Int(literal),
            ..
        }) => literal.base10_parse(),
        other => Err(syn::Error::new(
            other.span(),
            "curry! expected an integer literal for arity",
        )),
    }
}

fn curry_closure(closure: &ExprClosure) -> TokenStream2 {
    if closure.inputs.len() < 2 {
        return syn::Error::new(
            closure.span(),
            "curry! requires a closure with at least 2 arguments",
        )
        .to_compile_error();
    }

    nested_closures(closure.inputs.len(), &quote! { #closure })
}

fn nested_closures(arity: usize, function: &TokenStream2) -> TokenStream2 {
    let arguments: Vec<Ident> = (0..arity)
        .map(|index| format_ident!("__rightward_argument_{}", index))
        .collect();

    let (last, earlier) = arguments
        .split_last()
        .expect("arity is at least 2");

    let call = quote! {
        __rightward_function(
            #(::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&#earlier)),)*
            #last
        )
    };

    let mut body = quote! { move |#last| { #call } };

    for index in (0..earlier.len()).rev() {
        let argument = &arguments[index];
        let captured = &arguments[..index];
        body = quote! {
            move |#argument| {
                let __rightward_function = ::std::rc::Rc::clone(&__rightward_function);
                #(let #captured = ::std::rc::Rc::clone(&#captured);)*
                let #argument = ::std::rc::Rc::new(#argument);
                #body
            }
        };
    }

    quote! {
        {
            let __rightward_function = ::std::rc::Rc::new(#function);
            #body
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn closure_input_is_recognised() {
        let input = quote! { |a: i32, b: i32| a + b };
        assert!(matches!(parse_curry_input(input), Ok(CurryInput::Closure(_))));
    }

    #[rstest]
    fn function_without_arity_is_rejected() {
        let input = quote! { add };
        let error = parse_curry_input(input).err().expect("rejected");
        assert!(error.to_string().contains("requires an arity"));
    }

    #[rstest]
    #[case(quote! { add, 3 }, 3)]
    #[case(quote! { math::add, 2 }, 2)]
    fn function_with_arity(#[case] input: TokenStream2, #[case] expected: usize) {
        match parse_curry_input(input) {
            Ok(CurryInput::FunctionWithArity { arity, .. }) => assert_eq!(arity, expected),
            _ => panic!("expected function with arity"),
        }
    }

    #[rstest]
    fn arity_below_two_is_rejected() {
        assert!(parse_curry_input(quote! { negate, 1 }).is_err());
    }

    #[rstest]
    fn generated_chain_has_one_closure_per_argument() {
        let generated = nested_closures(3, &quote! { add3 }).to_string();
        assert_eq!(generated.matches("move |").count(), 3);
        assert!(generated.contains("__rightward_argument_2"));
    }
}
