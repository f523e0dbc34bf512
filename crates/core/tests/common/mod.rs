/// DSL macro for building test route networks.
///
/// Produces `DiGraph<&'static str>`.
///
/// # Syntax
///
/// ```ignore
/// routes![
///     DSM -> ORD,
///     ORD -> BGI,
///     SIN -> SIN,   // self-loop
/// ]
/// ```
///
/// Edges are inserted in the order written.
#[macro_export]
macro_rules! routes {
    ($($origin:ident -> $destination:ident),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut graph = hubreach_core::DiGraph::<&'static str>::new();
        $(graph.add_edge(stringify!($origin), stringify!($destination));)*
        graph
    }};
}
