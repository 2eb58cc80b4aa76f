use proc_macro::TokenStream;
use syn::parse_macro_input;

mod alternative;

/// Declares a struct usable as an alternative of a `OneOf`.
///
/// Adds `#[derive(Debug, Clone, PartialEq)]` and, for structs with fields, a positional
/// `new` constructor taking every field in declaration order.
///
/// # Usage
/// Unit, tuple and named-field structs:
/// ```rust,ignore
/// #[alternative]
/// pub struct Quit;
///
/// #[alternative]
/// pub struct Write(pub String);
///
/// #[alternative]
/// pub struct Move {
///     pub x: i32,
///     pub y: i32,
/// }
///
/// let m = Move::new(1, 2);
/// ```
///
/// Extra derives:
/// ```rust,ignore
/// #[alternative(derive(Eq, Hash))]
/// pub struct Quit;
/// ```
#[proc_macro_attribute]
pub fn alternative(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as alternative::Args);
    let item = parse_macro_input!(item as syn::Item);

    match alternative::generate(args, item) {
        Ok(gen) => gen.into(),
        Err(err) => err.into_compile_error().into(),
    }
}
