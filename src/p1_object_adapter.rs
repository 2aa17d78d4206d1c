// Pattern 1: Object Adapter - Incompatible Data Behind a Target Trait
// Demonstrates exposing an existing data holder through the capability
// trait clients expect, via composition and shared ownership.

use std::sync::Arc;

// ============================================================================
// Example: The Adaptee - Existing XML Data Holder
// ============================================================================

// Client data is originally in XML format; read-only after construction.
struct XmlData {
    raw: String,
}

impl XmlData {
    fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    fn raw(&self) -> &str {
        &self.raw
    }
}

// ============================================================================
// Example: The Target Interface and Its Native Implementation
// ============================================================================

// Capability the client depends on.
trait AnalyticsTool {
    fn analyse_data(&self);
}

// The analytics tool only understands JSON.
struct JsonAnalyticsTool {
    json: String,
}

impl JsonAnalyticsTool {
    fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

impl AnalyticsTool for JsonAnalyticsTool {
    fn analyse_data(&self) {
        println!("Analysing JSON data: {}", self.json);
    }
}

// ============================================================================
// Example: The Adapter - XML Through the JSON Tool Interface
// ============================================================================

// Holds a shared reference to the adaptee: several adapters may wrap the
// same XmlData, which is dropped only when the last referent goes away.
struct XmlToJsonAdapter {
    source: Arc<XmlData>,
}

impl XmlToJsonAdapter {
    fn new(source: Arc<XmlData>) -> Self {
        Self { source }
    }

    // The conversion is illustrative: the report names the steps, it does
    // not actually parse XML.
    fn conversion_report(&self) -> [String; 2] {
        [
            format!(
                "Converting XML Data: {} to JSON format...",
                self.source.raw()
            ),
            "Analysing the converted JSON data.".to_string(),
        ]
    }
}

impl AnalyticsTool for XmlToJsonAdapter {
    fn analyse_data(&self) {
        for line in self.conversion_report() {
            println!("{}", line);
        }
    }
}

// Client code: works with any AnalyticsTool, never sees the adaptee.
fn process_data(tool: &dyn AnalyticsTool) {
    tool.analyse_data();
}

// ============================================================================
// Example: Adapting XML Data for the JSON-only Client
// ============================================================================

fn adapter_example() {
    let xml = Arc::new(XmlData::new("Sample XML Data"));
    let adapter = XmlToJsonAdapter::new(Arc::clone(&xml));
    process_data(&adapter);
}

// ============================================================================
// Example: Shared Adaptee - One Data Holder, Many Adapters
// ============================================================================

fn shared_adaptee_example() {
    let xml = Arc::new(XmlData::new("Shared XML Data"));

    let first = XmlToJsonAdapter::new(Arc::clone(&xml));
    let second = XmlToJsonAdapter::new(Arc::clone(&xml));

    // One holder, three owners: the local binding and both adapters.
    println!("Adaptee reference count: {}", Arc::strong_count(&xml));
    process_data(&first);
    process_data(&second);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn report_contains_payload_verbatim() {
        let adapter = XmlToJsonAdapter::new(Arc::new(XmlData::new("Sample XML Data")));
        let [conversion, analysis] = adapter.conversion_report();

        assert!(conversion.contains("Sample XML Data"));
        assert!(conversion.starts_with("Converting"));
        assert_eq!(analysis, "Analysing the converted JSON data.");
    }

    #[test]
    fn conversion_precedes_analysis() {
        let adapter = XmlToJsonAdapter::new(Arc::new(XmlData::new("payload")));
        let report = adapter.conversion_report();

        assert!(report[0].contains("Converting"));
        assert!(report[1].contains("Analysing"));
    }

    #[test]
    fn adaptee_is_shared_not_owned() {
        let xml = Arc::new(XmlData::new("data"));
        let first = XmlToJsonAdapter::new(Arc::clone(&xml));
        let second = XmlToJsonAdapter::new(Arc::clone(&xml));
        assert_eq!(Arc::strong_count(&xml), 3);

        drop(first);
        drop(second);

        // Last referent standing still reads the payload.
        assert_eq!(Arc::strong_count(&xml), 1);
        assert_eq!(xml.raw(), "data");
    }

    #[test]
    fn adaptee_untouched_by_adaptation() {
        let xml = Arc::new(XmlData::new("original payload"));
        let adapter = XmlToJsonAdapter::new(Arc::clone(&xml));

        adapter.conversion_report();
        assert_eq!(xml.raw(), "original payload");
    }

    proptest! {
        #[test]
        fn any_payload_survives_conversion(payload in "[a-zA-Z0-9 <>/=]{1,64}") {
            let adapter = XmlToJsonAdapter::new(Arc::new(XmlData::new(payload.clone())));
            let [conversion, analysis] = adapter.conversion_report();

            prop_assert!(conversion.contains(&payload));
            prop_assert!(conversion.contains("Converting"));
            prop_assert!(analysis.contains("Analysing"));
        }
    }
}

fn main() {
    println!("Pattern 1: Object Adapter");
    println!("=========================\n");

    println!("=== Native JSON Tool ===");
    process_data(&JsonAnalyticsTool::new("{\"sample\": true}"));
    println!();

    println!("=== XML Through the Adapter ===");
    adapter_example();
    println!();

    println!("=== Shared Adaptee ===");
    shared_adaptee_example();
}
