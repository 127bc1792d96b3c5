/// Omits absent `Option` fields when a struct is serialized with serde.
///
/// Place it above `#[derive(Serialize, Deserialize)]`. Every field typed
/// `Option<_>` gets `#[serde(default, skip_serializing_if = ...)]`;
/// `#[keep_if_absent]` opts a field out. With `#[omit_absent(false)]` only
/// fields marked `#[omit_if_absent]` are omitted.
#[proc_macro_attribute]
pub fn omit_absent(
    attr: proc_macro::TokenStream,
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    match optional_value_macro_impl::omit_absent(attr.into(), input.into()) {
        Ok(out) => out.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
