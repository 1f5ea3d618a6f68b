use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Attribute, Data, DeriveInput, Expr, Fields, Lit, LitFloat, Meta, parse_macro_input,
    spanned::Spanned,
};

/// Variant attribute: #[weight(<expr>)]
#[proc_macro_derive(WeightedEnum, attributes(weight))]
pub fn derive_weighted_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let enum_ident = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return Err(syn::Error::new(
            input.ident.span(),
            "WeightedEnum can only be derived for enums",
        ));
    };

    let mut entries = Vec::with_capacity(data_enum.variants.len());
    for variant in &data_enum.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new(
                variant.span(),
                "WeightedEnum only supports fieldless variants",
            ));
        }

        let Some(expr) = weight_expr(&variant.attrs)? else {
            return Err(syn::Error::new(
                variant.span(),
                "missing #[weight(...)] on variant",
            ));
        };

        let ident = &variant.ident;
        // 1/100 => 1.0/100.0
        let expr = to_f64_expr(expr);
        entries.push(quote! { (Self::#ident, (#expr)) });
    }

    Ok(quote! {
        impl alias_sampler::WeightedEnum for #enum_ident {
            const ENTRIES: &'static [(Self, f64)] = &[
                #(#entries),*
            ];
        }

        impl #enum_ident {
            /// Build a `FrequencyTable` from the `#[weight]` annotations.
            pub fn frequency_table() -> ::core::result::Result<
                alias_sampler::FrequencyTable<Self>,
                alias_sampler::SamplerError,
            >
            where
                Self: Copy,
            {
                <Self as alias_sampler::WeightedEnum>::frequency_table()
            }
        }
    })
}

/// Find the last `#[weight(...)]` on a variant.
fn weight_expr(attrs: &[Attribute]) -> syn::Result<Option<Expr>> {
    let mut found = None;
    for attr in attrs {
        if !attr.path().is_ident("weight") {
            continue;
        }
        let Meta::List(list) = &attr.meta else {
            return Err(syn::Error::new(attr.span(), "use #[weight(<expr>)]"));
        };
        let expr = syn::parse2::<Expr>(list.tokens.clone())
            .map_err(|e| syn::Error::new(list.span(), format!("invalid weight expr: {e}")))?;
        found = Some(expr);
    }
    Ok(found)
}

/// Recursively rewrite integer literals to floating-point (e.g., 1 -> 1.0),
/// so that expressions like `1/100` use FP division.
fn to_f64_expr(mut e: Expr) -> Expr {
    match e {
        Expr::Lit(ref mut el) => {
            if let Lit::Int(int) = &el.lit {
                let s = format!("{}.0", int.base10_digits());
                el.lit = Lit::Float(LitFloat::new(&s, int.span()));
            }
            e
        }
        Expr::Binary(mut b) => {
            b.left = Box::new(to_f64_expr(*b.left));
            b.right = Box::new(to_f64_expr(*b.right));
            Expr::Binary(b)
        }
        Expr::Paren(mut p) => {
            p.expr = Box::new(to_f64_expr(*p.expr));
            Expr::Paren(p)
        }
        Expr::Unary(mut u) => {
            u.expr = Box::new(to_f64_expr(*u.expr));
            Expr::Unary(u)
        }
        Expr::Group(mut g) => {
            g.expr = Box::new(to_f64_expr(*g.expr));
            Expr::Group(g)
        }
        _ => e,
    }
}
