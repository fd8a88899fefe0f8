//! Plugin Registry

use crate::{FunctionPlugin, FunctionMeta};
use crate::EvalContext;
use convertix_core::{Value, ConvertixError};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;

/// Central plugin registry
pub struct PluginRegistry {
    functions: HashMap<String, Arc<dyn FunctionPlugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    pub fn with_function<F: FunctionPlugin + 'static>(mut self, f: F) -> Self {
        let name = f.meta().name.to_lowercase();
        self.functions.insert(name, Arc::new(f));
        self
    }

    pub fn get_function(&self, name: &str) -> Option<&dyn FunctionPlugin> {
        self.functions.get(&name.to_lowercase()).map(|f| f.as_ref())
    }

    /// Registered function names, sorted
    pub fn function_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn call_function(&self, name: &str, args: &[Value], ctx: &EvalContext) -> Value {
        match self.get_function(name) {
            Some(f) => {
                debug!(function = name, args = args.len(), "calling function");
                f.call(args, ctx)
            }
            None => {
                // Find similar function names for better error message
                let similar = self.find_similar_functions(name);
                let mut err = ConvertixError::undefined_func(name);
                if !similar.is_empty() {
                    let suggestions: Vec<&str> = similar.iter().take(5).map(|s| s.as_str()).collect();
                    err = err.with_suggestion(format!(
                        "Similar: {}. Use list_functions for full list.",
                        suggestions.join(", ")
                    ));
                }
                Value::Error(err)
            }
        }
    }

    /// Find function names similar to the given name (for error suggestions)
    fn find_similar_functions(&self, name: &str) -> Vec<String> {
        let name_lower = name.to_lowercase();
        let mut matches: Vec<(String, usize)> = self.functions.keys()
            .filter_map(|func_name| {
                let score = Self::similarity_score(&name_lower, func_name);
                if score > 0 {
                    Some((func_name.clone(), score))
                } else {
                    None
                }
            })
            .collect();

        // Higher score first, then alphabetical for stable output
        matches.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        matches.into_iter().map(|(name, _)| name).collect()
    }

    /// Calculate similarity score between two strings
    fn similarity_score(query: &str, candidate: &str) -> usize {
        let mut score = 0;

        if candidate.starts_with(query) {
            score += 100;
        } else if candidate.contains(query) {
            score += 50;
        } else if query.contains(candidate) {
            score += 30;
        }

        let query_chars: HashSet<char> = query.chars().collect();
        let candidate_chars: HashSet<char> = candidate.chars().collect();
        let common = query_chars.intersection(&candidate_chars).count();
        score += common * 2;

        let len_diff = query.len().abs_diff(candidate.len());
        if len_diff < 5 && score > 0 {
            score += 5 - len_diff;
        }

        score
    }

    pub fn help(&self, name: Option<&str>) -> Value {
        match name {
            Some(n) => self.help_for(n),
            None => self.general_help(),
        }
    }

    fn help_for(&self, name: &str) -> Value {
        match self.functions.get(&name.to_lowercase()) {
            Some(f) => Value::Object(Self::function_to_help(f.meta())),
            None => Value::Error(ConvertixError::not_found(format!("No function named '{}'", name))),
        }
    }

    fn general_help(&self) -> Value {
        let mut help = HashMap::new();

        let mut funcs_by_cat: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for name in self.function_names() {
            if let Some(f) = self.functions.get(name) {
                funcs_by_cat.entry(f.meta().category.to_string())
                    .or_default()
                    .push(name.to_string());
            }
        }
        help.insert("functions".to_string(),
            Value::Object(funcs_by_cat.into_iter()
                .map(|(k, v)| (k, Value::List(v.into_iter().map(Value::Text).collect())))
                .collect()));

        help.insert("usage".to_string(),
            Value::Text("Call help('function_name') for detailed help.".to_string()));

        Value::Object(help)
    }

    fn function_to_help(meta: FunctionMeta) -> HashMap<String, Value> {
        let mut help = HashMap::new();
        help.insert("name".to_string(), Value::Text(meta.name.to_string()));
        help.insert("description".to_string(), Value::Text(meta.description.to_string()));
        help.insert("usage".to_string(), Value::Text(meta.usage.to_string()));
        help.insert("returns".to_string(), Value::Text(meta.returns.to_string()));
        help.insert("category".to_string(), Value::Text(meta.category.to_string()));
        help.insert("args".to_string(), Value::List(
            meta.args.iter().map(|a| {
                let mut arg = HashMap::new();
                arg.insert("name".to_string(), Value::Text(a.name.to_string()));
                arg.insert("type".to_string(), Value::Text(a.typ.to_string()));
                arg.insert("description".to_string(), Value::Text(a.description.to_string()));
                arg.insert("optional".to_string(), Value::Bool(a.optional));
                if let Some(default) = a.default {
                    arg.insert("default".to_string(), Value::Text(default.to_string()));
                }
                Value::Object(arg)
            }).collect()
        ));
        help.insert("examples".to_string(), Value::List(
            meta.examples.iter().map(|e| Value::Text(e.to_string())).collect()
        ));
        help.insert("related".to_string(), Value::List(
            meta.related.iter().map(|r| Value::Text(r.to_string())).collect()
        ));
        help
    }

    pub fn list_functions(&self, category: Option<&str>) -> Value {
        let funcs: Vec<Value> = self.function_names().into_iter()
            .filter_map(|name| self.functions.get(name))
            .filter(|f| category.map_or(true, |c| f.meta().category == c))
            .map(|f| {
                let meta = f.meta();
                let mut obj = HashMap::new();
                obj.insert("name".to_string(), Value::Text(meta.name.to_string()));
                obj.insert("description".to_string(), Value::Text(meta.description.to_string()));
                obj.insert("usage".to_string(), Value::Text(meta.usage.to_string()));
                obj.insert("category".to_string(), Value::Text(meta.category.to_string()));
                Value::Object(obj)
            })
            .collect();
        Value::List(funcs)
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ArgMeta;
    use convertix_core::codes;

    struct Double;

    static DOUBLE_ARGS: [ArgMeta; 1] = [ArgMeta::required("x", "Number", "Value to double")];
    static DOUBLE_EXAMPLES: [&str; 1] = ["double(2) → 4"];

    impl FunctionPlugin for Double {
        fn meta(&self) -> FunctionMeta {
            FunctionMeta {
                name: "double",
                description: "Multiply by two",
                usage: "double(x)",
                args: &DOUBLE_ARGS,
                returns: "Number",
                examples: &DOUBLE_EXAMPLES,
                category: "test",
                related: &[],
            }
        }

        fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
            match args.first().map(Value::to_number) {
                Some(Ok(n)) => Value::Number(n * 2.0),
                Some(Err(e)) => Value::Error(e),
                None => Value::Error(ConvertixError::arg_count("double", 1, 0)),
            }
        }
    }

    fn ctx() -> EvalContext {
        EvalContext::new()
    }

    #[test]
    fn test_call_is_case_insensitive() {
        let registry = PluginRegistry::new().with_function(Double);
        let result = registry.call_function("DOUBLE", &[Value::Number(2.0)], &ctx());
        assert_eq!(result.as_number(), Some(4.0));
    }

    #[test]
    fn test_unknown_function_suggests_similar() {
        let registry = PluginRegistry::new().with_function(Double);
        let result = registry.call_function("doubl", &[], &ctx());
        match result {
            Value::Error(e) => {
                assert_eq!(e.code, codes::UNDEFINED_FUNC);
                assert!(e.suggestion.unwrap_or_default().contains("double"));
            }
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[test]
    fn test_help_for_function() {
        let registry = PluginRegistry::new().with_function(Double);
        let help = registry.help(Some("double"));
        assert_eq!(help.get("usage").as_text(), Some("double(x)"));
        assert_eq!(help.get("args").as_list().map(|a| a.len()), Some(1));
    }

    #[test]
    fn test_help_unknown() {
        let registry = PluginRegistry::new();
        assert!(registry.help(Some("nope")).is_error());
    }

    #[test]
    fn test_general_help_groups_by_category() {
        let registry = PluginRegistry::new().with_function(Double);
        let help = registry.help(None);
        let test_funcs = help.get("functions").get("test");
        assert_eq!(test_funcs.as_list().map(|l| l.len()), Some(1));
    }

    #[test]
    fn test_list_functions_filter() {
        let registry = PluginRegistry::new().with_function(Double);
        assert_eq!(registry.list_functions(Some("test")).as_list().map(|l| l.len()), Some(1));
        assert_eq!(registry.list_functions(Some("units")).as_list().map(|l| l.len()), Some(0));
    }
}
