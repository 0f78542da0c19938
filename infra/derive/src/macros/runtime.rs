use proc_macro2::TokenStream;
use quote::quote;
use syn::{Error, Ident, ItemFn, ReturnType, Type};

/// Expands `#[ohm_runtime::main]` into a synchronous `main` that owns a configured runtime.
pub fn expand_main(args: TokenStream, input: ItemFn) -> TokenStream {
    if input.sig.asyncness.is_none() {
        return Error::new_spanned(
            &input.sig.ident,
            "#[ohm_runtime::main] can only be applied to async functions",
        )
        .to_compile_error();
    }

    if !returns_result(&input.sig.output) {
        return Error::new_spanned(
            &input.sig.output,
            "#[ohm_runtime::main] requires a Result return type",
        )
        .to_compile_error();
    }

    let profile = match profile_constructor(args) {
        Ok(profile) => profile,
        Err(err) => return err.to_compile_error(),
    };

    let ItemFn { attrs, vis, sig, block } = input;
    let name = &sig.ident;
    let output = &sig.output;

    quote! {
        #(#attrs)*
        #vis fn #name() #output {
            let config = #profile;
            let runtime = ::ohm_runtime::build_runtime_with_config(&config)?;
            runtime.block_on(async #block)
        }
    }
}

fn profile_constructor(args: TokenStream) -> syn::Result<TokenStream> {
    if args.is_empty() {
        return Ok(quote! { ::ohm_runtime::RuntimeConfig::default() });
    }

    let profile: Ident = syn::parse2(args)?;
    match profile.to_string().as_str() {
        "high_performance" => Ok(quote! { ::ohm_runtime::RuntimeConfig::high_performance() }),
        "memory_efficient" => Ok(quote! { ::ohm_runtime::RuntimeConfig::memory_efficient() }),
        "default" => Ok(quote! { ::ohm_runtime::RuntimeConfig::default() }),
        _ => Err(Error::new_spanned(
            profile,
            "Unknown runtime profile. Use: high_performance, memory_efficient, or default",
        )),
    }
}

fn returns_result(output: &ReturnType) -> bool {
    match output {
        ReturnType::Type(_, ty) => match &**ty {
            Type::Path(path) => path.path.segments.last().is_some_and(|seg| seg.ident == "Result"),
            _ => false,
        },
        ReturnType::Default => false,
    }
}
