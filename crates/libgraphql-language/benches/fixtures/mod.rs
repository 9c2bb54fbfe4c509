pub const SCHEMA: &str = include_str!("schema.graphql");
pub const QUERY: &str = include_str!("query.graphql");

/// A query whose selection sets nest `depth` levels deep.
pub fn deeply_nested_query(depth: usize) -> String {
    let mut source = String::from("query Nested ");
    for level in 0..depth {
        source.push_str(&format!("{{ f{level}(arg: {level}) "));
    }
    source.push_str("{ leaf }");
    for _ in 0..depth {
        source.push_str(" }");
    }
    source
}

/// A document with `count` small named operations.
pub fn many_operations(count: usize) -> String {
    (0..count)
        .map(|i| format!("query Op{i}($id: ID!) {{ node(id: $id) {{ id ...F{i} }} }}\n"))
        .collect()
}
