mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the `ErrorKind` trait from `sym-error` for the given struct.
///
/// The information of the error is customized using the `error` attribute:
/// ```ignore
/// use sym_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("unknown variable `{}`", name),
///     labels = ["this variable"],
///     help = "bind it before evaluating",
/// )]
/// pub struct UndefinedVariable {
///     pub name: String,
/// }
/// ```
///
/// | Tag       | Description                                                                  |
/// | --------- | ---------------------------------------------------------------------------- |
/// | `message` | The message displayed at the top of the error.                               |
/// | `labels`  | An iterable of label texts, paired in order with the spans of the error.     |
/// | `help`    | Optional help text describing what the user can do to fix it.                |
///
/// Each tag accepts an expression. For structs with named fields, the expression is evaluated
/// with the fields of the struct in scope. Tuple structs are rejected.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl sym_error::ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            #target
        }
    }.into()
}
