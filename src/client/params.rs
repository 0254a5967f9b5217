use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// Build a [`Params`] from `key => value` pairs, all of them present.
///
/// ```
/// use github_rest::params;
///
/// let replacements = params! { "owner" => "acme", "repo" => "widgets" };
/// assert_eq!(replacements.len(), 2);
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::client::Params::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut params = $crate::client::Params::new();
        $(
            params.insert($key, ::std::option::Option::Some($value));
        )+
        params
    }};
}

/// Ordered request parameters.
///
/// Every entry is either present (`Some`) or null (`None`). Null entries are dropped by
/// [`Params::sanitize`] before anything goes on the wire, while present falsy values such as
/// `""`, `0` or `false` are kept. `Some(Value::Null)` is an explicit JSON `null` and is sent
/// as-is, which is how fields like an issue's milestone get cleared.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, Option<Value>)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry. An existing key keeps its position and takes the new value.
    pub fn insert<K, V>(&mut self, key: K, value: Option<V>) -> &mut Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let key = key.into();
        let value = value.map(Into::into);

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }

        self
    }

    /// Add a present value.
    pub fn set<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.insert(key, Some(value));
        self
    }

    /// Add a value that may be null.
    pub fn set_opt<K: Into<String>, V: Into<Value>>(mut self, key: K, value: Option<V>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add a null entry.
    pub fn null<K: Into<String>>(mut self, key: K) -> Self {
        self.insert(key, None::<Value>);
        self
    }

    /// Look up `key`. The outer `Option` tells whether the key exists, the inner one whether it
    /// is null.
    pub fn get(&self, key: &str) -> Option<Option<&Value>> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    /// Copy of the present entries, in their original order.
    pub fn sanitize(&self) -> Sanitized {
        Sanitized(
            self.entries
                .iter()
                .filter_map(|(k, v)| v.as_ref().map(|v| (k.clone(), v.clone())))
                .collect(),
        )
    }
}

impl<K, V> std::iter::FromIterator<(K, Option<V>)> for Params
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// Parameters with every null entry removed. Serializes as a JSON object in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sanitized(Vec<(String, Value)>);

impl Sanitized {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Pairs suitable for a query string.
    pub fn query_pairs(&self) -> Vec<(&str, String)> {
        self.0
            .iter()
            .map(|(k, v)| (k.as_str(), value_to_string(v)))
            .collect()
    }
}

impl Serialize for Sanitized {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// The text a value takes in a URL path or query string.
///
/// Arrays become comma separated lists, which is what GitHub expects for filters like `labels`.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(values) => values
            .iter()
            .map(value_to_string)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// Fill the `{name}` placeholders of `template` from `replacements`.
///
/// Null replacements are ignored and placeholders without a replacement are left verbatim. The
/// template is scanned once, so text coming from a replacement is never substituted again.
pub fn substitute(template: &str, replacements: &Params) -> String {
    let replacements = replacements.sanitize();
    let mut path = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        path.push_str(&rest[..open]);
        let candidate = &rest[open + 1..];

        let close = match candidate.find(|c: char| c == '}' || c == '{') {
            Some(close) if candidate.as_bytes()[close] == b'}' => close,
            // Either unterminated or another '{' starts first; keep this one as text
            _ => {
                path.push('{');
                rest = candidate;
                continue;
            }
        };

        let name = &candidate[..close];
        match replacements.get(name) {
            Some(value) => path.push_str(&value_to_string(value)),
            None => {
                path.push('{');
                path.push_str(name);
                path.push('}');
            }
        }

        rest = &candidate[close + 1..];
    }

    path.push_str(rest);
    path
}

#[cfg(test)]
mod test {
    use super::{substitute, value_to_string, Params};
    use serde_json::{json, Value};

    #[test]
    fn sanitize_keeps_falsy_values() {
        let params = Params::new()
            .null("state")
            .set("per_page", 0)
            .set("labels", "");

        let sanitized = params.sanitize();
        assert_eq!(sanitized.keys().collect::<Vec<_>>(), ["per_page", "labels"]);
        assert_eq!(sanitized.get("per_page"), Some(&json!(0)));
        assert_eq!(sanitized.get("labels"), Some(&json!("")));
        assert_eq!(sanitized.get("state"), None);
    }

    #[test]
    fn sanitize_preserves_order_and_false() {
        let params = Params::new()
            .set("draft", false)
            .set_opt("title", None::<&str>)
            .set("base", "main")
            .set_opt("head", Some("feature"))
            .null("body");

        let sanitized = params.sanitize();
        assert_eq!(
            sanitized.keys().collect::<Vec<_>>(),
            ["draft", "base", "head"]
        );
        assert_eq!(sanitized.get("draft"), Some(&Value::Bool(false)));

        // The source is left untouched
        assert_eq!(params.len(), 5);
        assert_eq!(params.get("title"), Some(None));
    }

    #[test]
    fn explicit_json_null_survives() {
        let params = Params::new().set("milestone", Value::Null).null("title");

        let sanitized = params.sanitize();
        assert_eq!(sanitized.len(), 1);
        assert_eq!(serde_json::to_string(&sanitized).unwrap(), r#"{"milestone":null}"#);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut params = Params::new().set("a", 1).set("b", 2);
        params.insert("a", None::<Value>);
        params.insert("c", Some(3));

        assert_eq!(
            params.iter().map(|(k, _)| k).collect::<Vec<_>>(),
            ["a", "b", "c"]
        );
        assert_eq!(params.get("a"), Some(None));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn serializes_in_insertion_order() {
        let sanitized = Params::new()
            .set("title", "Found a bug")
            .set("labels", vec!["bug", "ui"])
            .set("milestone", 4)
            .sanitize();

        assert_eq!(
            serde_json::to_string(&sanitized).unwrap(),
            r#"{"title":"Found a bug","labels":["bug","ui"],"milestone":4}"#
        );
    }

    #[test]
    fn query_pairs_render_values() {
        let sanitized = Params::new()
            .set("labels", vec!["bug", "ui"])
            .set("per_page", 0)
            .set("all", true)
            .set("q", "")
            .sanitize();

        assert_eq!(
            sanitized.query_pairs(),
            vec![
                ("labels", "bug,ui".to_owned()),
                ("per_page", "0".to_owned()),
                ("all", "true".to_owned()),
                ("q", String::new()),
            ]
        );
    }

    #[test]
    fn value_strings() {
        assert_eq!(value_to_string(&json!("acme")), "acme");
        assert_eq!(value_to_string(&json!(5)), "5");
        assert_eq!(value_to_string(&json!(false)), "false");
        assert_eq!(value_to_string(&json!(null)), "");
        assert_eq!(value_to_string(&json!({"a": 1})), r#"{"a":1}"#);
    }

    #[test]
    fn substitute_owner_repo() {
        let replacements = params! { "owner" => "acme", "repo" => "widgets" };
        assert_eq!(
            substitute("/repos/{owner}/{repo}", &replacements),
            "/repos/acme/widgets"
        );
    }

    #[test]
    fn substitute_every_occurrence_and_numbers() {
        let replacements = params! { "id" => 7u64 };
        assert_eq!(substitute("/a/{id}/b/{id}", &replacements), "/a/7/b/7");
    }

    #[test]
    fn substitute_leaves_unmatched_placeholders() {
        let replacements = params! { "owner" => "acme" };
        assert_eq!(
            substitute("/repos/{owner}/{repo}/issues/{issue_number}", &replacements),
            "/repos/acme/{repo}/issues/{issue_number}"
        );
    }

    #[test]
    fn substitute_ignores_null_replacements() {
        let replacements = Params::new().set("owner", "acme").null("repo");
        assert_eq!(
            substitute("/repos/{owner}/{repo}", &replacements),
            "/repos/acme/{repo}"
        );
    }

    #[test]
    fn substitute_is_order_insensitive() {
        let forward = params! { "owner" => "acme", "repo" => "widgets" };
        let backward = params! { "repo" => "widgets", "owner" => "acme" };
        let template = "/repos/{owner}/{repo}/pulls";

        assert_eq!(
            substitute(template, &forward),
            substitute(template, &backward)
        );
    }

    #[test]
    fn substitute_does_not_rescan() {
        let replacements = params! { "owner" => "{repo}", "repo" => "widgets" };
        assert_eq!(
            substitute("/repos/{owner}", &replacements),
            "/repos/{repo}"
        );
    }

    #[test]
    fn substitute_odd_braces() {
        let replacements = params! { "a" => "x" };
        assert_eq!(substitute("/{{a}", &replacements), "/{x");
        assert_eq!(substitute("/{a", &replacements), "/{a");
        assert_eq!(substitute("/}{a}", &replacements), "/}x");
        assert_eq!(substitute("/plain", &replacements), "/plain");
    }

    #[test]
    fn collect_from_pairs() {
        let params: Params = vec![("state", Some("open")), ("sort", None)]
            .into_iter()
            .collect();

        assert_eq!(params.len(), 2);
        assert_eq!(params.sanitize().len(), 1);
    }
}
