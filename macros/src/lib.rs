//! Test attribute shared by the `rxsink` test suites.
//!
//! `#[rxsink_macro::test]` expands to `#[test]` for sync fns and to
//! `#[tokio::test]` for async fns, and to `wasm_bindgen_test` on wasm32.
//! Async tests may pick a runtime flavor: `#[rxsink_macro::test(current)]`
//! or `#[rxsink_macro::test(multi)]`.
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, spanned::Spanned, Ident, ItemFn, LitStr};

const USAGE: &str = "rxsink_macro::test accepts no arguments, `current` or `multi`";

fn flavor(name: &str) -> Option<proc_macro2::TokenStream> {
  match name {
    "current" => Some(quote!(flavor = "current_thread")),
    "multi" => Some(quote!(flavor = "multi_thread", worker_threads = 2)),
    _ => None,
  }
}

fn parse_flavor(args: proc_macro2::TokenStream) -> syn::Result<proc_macro2::TokenStream> {
  let span = args.span();
  let name = if let Ok(ident) = syn::parse2::<Ident>(args.clone()) {
    ident.to_string()
  } else if let Ok(lit) = syn::parse2::<LitStr>(args) {
    lit.value()
  } else {
    return Err(syn::Error::new(span, USAGE));
  };
  flavor(&name).ok_or_else(|| syn::Error::new(span, USAGE))
}

#[proc_macro_attribute]
pub fn test(attr: TokenStream, item: TokenStream) -> TokenStream {
  let input = parse_macro_input!(item as ItemFn);
  let is_async = input.sig.asyncness.is_some();
  let raw_args = proc_macro2::TokenStream::from(attr);

  let tokio_args = if raw_args.is_empty() {
    proc_macro2::TokenStream::new()
  } else if !is_async {
    return TokenStream::from(
      syn::Error::new(raw_args.span(), "runtime flavors only apply to async tests")
        .to_compile_error(),
    );
  } else {
    match parse_flavor(raw_args) {
      Ok(args) => args,
      Err(e) => return TokenStream::from(e.to_compile_error()),
    }
  };

  let wasm_attr = if is_async {
    quote!(wasm_bindgen_test::wasm_bindgen_test(async))
  } else {
    quote!(wasm_bindgen_test::wasm_bindgen_test)
  };
  let native_attr = if is_async { quote!(tokio::test(#tokio_args)) } else { quote!(test) };

  let expanded = quote! {
      #[cfg_attr(target_arch = "wasm32", #wasm_attr)]
      #[cfg_attr(not(target_arch = "wasm32"), #native_attr)]
      #input
  };

  TokenStream::from(expanded)
}
