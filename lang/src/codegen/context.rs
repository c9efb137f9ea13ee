/// Accumulates the globals and functions of one module and prints them
/// as LLVM-style textual IR.
pub struct CodegenContext {
    module_name: String,
    globals: Vec<String>,
    functions: Vec<IrFunction>,
}

struct IrFunction {
    name: String,
    return_type: String,
    body: Vec<String>,
}

impl CodegenContext {
    pub fn new(module_name: &str) -> Self {
        Self {
            module_name: module_name.to_string(),
            globals: Vec::new(),
            functions: Vec::new(),
        }
    }

    /// Add a private null-terminated string constant.
    pub fn add_global_string(&mut self, name: &str, value: &str) {
        self.globals.push(format!(
            "@{} = private unnamed_addr constant [{} x i8] c\"{}\\00\", align 1",
            name,
            value.len() + 1,
            encode_bytes(value)
        ));
    }

    /// Add a function with a single entry block holding `body`.
    pub fn add_function(&mut self, name: &str, return_type: &str, body: Vec<String>) {
        self.functions.push(IrFunction {
            name: name.to_string(),
            return_type: return_type.to_string(),
            body,
        });
    }

    /// Print the module in textual form.
    pub fn print(&self) -> String {
        let mut lines = Vec::new();
        lines.push(format!("; ModuleID = '{}'", self.module_name));
        lines.push(format!("source_filename = \"{}\"", self.module_name));

        for global in &self.globals {
            lines.push(String::new());
            lines.push(global.clone());
        }

        for function in &self.functions {
            lines.push(String::new());
            lines.push(format!(
                "define {} @{}() {{",
                function.return_type, function.name
            ));
            lines.push("entry:".to_string());
            for instruction in &function.body {
                lines.push(format!("  {}", instruction));
            }
            lines.push("}".to_string());
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

// Printable ASCII stays literal; the quote, the backslash and everything
// else become \XX hex escapes.
fn encode_bytes(value: &str) -> String {
    let mut encoded = String::new();
    for byte in value.bytes() {
        if (0x20..=0x7e).contains(&byte) && byte != b'"' && byte != b'\\' {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("\\{:02X}", byte));
        }
    }
    encoded
}
