use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{parse_quote, Data, DeriveInput, Field, Fields, Path, Type};


const OMIT_ATTRIBUTE: &str = "omit_if_absent";
const KEEP_ATTRIBUTE: &str = "keep_if_absent";

struct StructAttribute {
    omit_by_default: bool,
}

impl Parse for StructAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut out = StructAttribute {
            omit_by_default: true,
        };

        if input.is_empty() {
            return Ok(out);
        }

        out.omit_by_default = input.parse::<syn::LitBool>()?.value;
        Ok(out)
    }
}

// Matches on the last segment only, so any type spelled `Option` qualifies.
// Both optional_value::Option and std's Option implement IsAbsent.
fn is_path_option(p: &Path) -> bool {
    p.segments
        .last()
        .map(|ps| ps.ident == "Option")
        .unwrap_or(false)
}

fn is_type_option(t: &Type) -> bool {
    match t {
        Type::Path(type_path) => type_path.qself.is_none() && is_path_option(&type_path.path),
        Type::Paren(type_paren) => is_type_option(&type_paren.elem),
        Type::Group(type_group) => is_type_option(&type_group.elem),
        _ => false,
    }
}

struct FieldAttributeData {
    omit: bool,
}

impl FieldAttributeData {
    fn apply_to_field(self, f: &mut Field) {
        if self.omit {
            f.attrs.push(parse_quote! {
                #[serde(default, skip_serializing_if = "::optional_value::IsAbsent::is_absent")]
            });
        }
    }
}

fn extract_relevant_attributes(field: &mut Field, omit_by_default: bool) -> syn::Result<FieldAttributeData> {
    let is_option = is_type_option(&field.ty);
    let mut field_attribute_data = FieldAttributeData {
        omit: is_option && omit_by_default,
    };

    for a in &field.attrs {
        if a.path().is_ident(OMIT_ATTRIBUTE) {
            if !is_option {
                return Err(syn::Error::new_spanned(
                    a,
                    format!("`#[{OMIT_ATTRIBUTE}]` only applies to `Option` fields"),
                ));
            }
            field_attribute_data.omit = true;
        } else if a.path().is_ident(KEEP_ATTRIBUTE) {
            field_attribute_data.omit = false;
        }
    }

    field
        .attrs
        .retain(|a| !a.path().is_ident(OMIT_ATTRIBUTE) && !a.path().is_ident(KEEP_ATTRIBUTE));
    Ok(field_attribute_data)
}

/// Rewrites a struct so that its absent `Option` fields are left out when
/// serialized and decode as absent when missing.
///
/// Must be placed above `#[derive(Serialize)]` so serde sees the added
/// `#[serde(...)]` field attributes.
pub fn omit_absent(attr: TokenStream, input: TokenStream) -> syn::Result<TokenStream> {
    let attr = syn::parse2::<StructAttribute>(attr)?;
    let mut derive_input = syn::parse2::<DeriveInput>(input)?;

    let data_struct = match &mut derive_input.data {
        Data::Struct(data_struct) => data_struct,
        _ => {
            return Err(syn::Error::new_spanned(
                &derive_input.ident,
                "omit_absent only works for structs",
            ))
        }
    };

    match &mut data_struct.fields {
        Fields::Named(fields) => {
            for field in fields.named.iter_mut() {
                extract_relevant_attributes(field, attr.omit_by_default)?.apply_to_field(field);
            }
        }
        Fields::Unnamed(fields) => {
            return Err(syn::Error::new_spanned(
                fields,
                "omit_absent needs named fields to omit",
            ))
        }
        Fields::Unit => {}
    }

    Ok(quote! { #derive_input })
}
