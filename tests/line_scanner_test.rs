#[cfg(test)]
mod tests {
    use std::fs;
    use anyhow::Result;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use apex_scanner::{DeclarationKind, LineScanner, ScanConfig, ScanProcessor, ScopeConfig};

    fn scanner(scopes: &[&str]) -> LineScanner {
        LineScanner::new(ScopeConfig::new(scopes.iter().copied()))
    }

    #[test]
    fn test_test_class() {
        let source = r#"
@isTest
private class OrderTest {
    @TestSetup
    static void setup() {
        insert new Account(Name = 'x');
    }

    static testMethod void placesOrder() {
        System.assert(true);
    }

    @isTest static void cancelsOrder() {
    }
}
"#;
        let result = scanner(&["testmethod", "private"]).scan(source);

        let kept: Vec<(DeclarationKind, Option<&str>, Option<&str>)> = result.declarations.iter()
            .map(|d| (d.kind, d.name.as_deref(), d.scope.as_deref()))
            .collect();
        assert_eq!(kept, vec![
            (DeclarationKind::Class, Some("OrderTest"), Some("private")),
            (DeclarationKind::Method, Some("setup"), Some("private")),
            (DeclarationKind::Method, Some("placesOrder"), Some("testmethod")),
            (DeclarationKind::Method, Some("cancelsOrder"), Some("private")),
        ]);
        assert_eq!(result.declarations[0].line_number, 3);
    }

    #[test]
    fn test_enums_and_nested_types() {
        let source = r#"
public class Outer {
    public enum Mode { FAST, SLOW }
    public Mode current;

    public interface Handler {
        void handle(Mode m);
    }

    public class Inner {
        public Inner() {
        }
    }
    public Integer afterInner() {
        return 1;
    }
}
"#;
        let result = scanner(&["public"]).scan(source);

        let kept: Vec<(DeclarationKind, Option<&str>, Option<&str>)> = result.declarations.iter()
            .map(|d| (d.kind, d.name.as_deref(), d.parent.as_deref()))
            .collect();
        assert_eq!(kept, vec![
            (DeclarationKind::Class, Some("Outer"), None),
            (DeclarationKind::Enum, Some("Mode"), Some("Outer")),
            (DeclarationKind::Property, Some("current"), Some("Outer")),
            (DeclarationKind::Interface, Some("Handler"), Some("Outer")),
            (DeclarationKind::Method, Some("handle"), Some("Outer.Handler")),
            (DeclarationKind::Class, Some("Inner"), Some("Outer")),
            (DeclarationKind::Constructor, Some("Inner"), Some("Outer.Inner")),
            (DeclarationKind::Method, Some("afterInner"), Some("Outer")),
        ]);
    }

    #[test]
    fn test_brace_on_next_line() {
        let source = "public class Foo\n{\n    public void run()\n    {\n        run();\n    }\n}\npublic class Bar {}\n";
        let result = scanner(&["public"]).scan(source);

        let kept: Vec<(Option<&str>, Option<&str>)> = result.declarations.iter()
            .map(|d| (d.name.as_deref(), d.parent.as_deref()))
            .collect();
        assert_eq!(kept, vec![
            (Some("Foo"), None),
            (Some("run"), Some("Foo")),
            (Some("Bar"), None),
        ]);
    }

    #[test]
    fn test_block_comments_are_ignored() {
        let source = r#"
public class Foo {
    /*
    public void commentedOut() {}
    */
    // public void alsoCommented() {}
    public void real() {}
}
"#;
        let result = scanner(&["public"]).scan(source);
        let names: Vec<&str> = result.declarations.iter().filter_map(|d| d.name.as_deref()).collect();
        assert_eq!(names, vec!["Foo", "real"]);
        assert!(result.declarations.iter().all(|d| d.doc_comment.is_none()));
    }

    #[test]
    fn test_class_keyword_in_string_does_not_open_a_type() {
        let source = r#"
public class Foo {
    private static final String HINT = 'pick a class to run';
    public void run() { String s = helper.load(x); }
    public void stop() {
        List<String> names = helper.names();
        Integer total = Util.count(names);
    }
}
"#;
        let result = scanner(&["public", "private"]).scan(source);

        let kept: Vec<(DeclarationKind, Option<&str>, Option<&str>)> = result.declarations.iter()
            .map(|d| (d.kind, d.name.as_deref(), d.parent.as_deref()))
            .collect();
        assert_eq!(kept, vec![
            (DeclarationKind::Class, Some("Foo"), None),
            (DeclarationKind::Property, Some("HINT"), Some("Foo")),
            (DeclarationKind::Method, Some("run"), Some("Foo")),
            (DeclarationKind::Method, Some("stop"), Some("Foo")),
        ]);
    }

    #[test]
    fn test_method_bodies_are_never_classified() {
        let source = r#"
public class Jobs {
    public void schedule() {
        static Integer attempts = 0;
        void retry();
        List<Id> ids = collect(scope);
        return (Wrapper) JSON.deserialize(body, Wrapper.class);
    }
}
"#;
        let result = scanner(&["public", "private"]).scan(source);

        let names: Vec<&str> = result.declarations.iter().filter_map(|d| d.name.as_deref()).collect();
        assert_eq!(names, vec!["Jobs", "schedule"]);
        assert_eq!(result.skipped_lines, 6);
    }

    #[test]
    fn test_trigger_body_is_not_classified() {
        let source = r#"
trigger AccountTrigger on Account (before insert) {
    String name = helper.normalize(Trigger.new);
    Integer total = Util.count(Trigger.new);
    for (Account a : Trigger.new) {
        List<String> parts = a.Name.split(' ');
    }
}
"#;
        let result = scanner(&["public", "private"]).scan(source);

        assert!(result.declarations.is_empty(), "unexpected declarations: {:?}", result.declarations);
        assert_eq!(result.skipped_lines, 7);
    }

    #[test]
    fn test_trigger_file_has_no_declarations() -> Result<()> {
        let dir = tempdir()?;
        fs::write(
            dir.path().join("AccountTrigger.trigger"),
            "trigger AccountTrigger on Account (after update) {\n    Integer total = Util.count(Trigger.new);\n}\n",
        )?;

        let config = ScanConfig {
            scopes: ScopeConfig::new(["public", "private"]),
            parallel_threads: Some(1),
            ..ScanConfig::default()
        };
        let result = ScanProcessor::new(config).scan_path(dir.path())?;

        assert_eq!(result.stats.total_files, 1);
        assert_eq!(result.stats.empty_files, 1);
        assert_eq!(result.stats.total_declarations, 0);
        Ok(())
    }

    #[test]
    fn test_json_report() -> Result<()> {
        let dir = tempdir()?;
        let file = dir.path().join("Foo.cls");
        fs::write(&file, "public class Foo {\n    public void run() {}\n}\n")?;

        let config = ScanConfig {
            scopes: ScopeConfig::new(["public"]),
            parallel_threads: Some(1),
            ..ScanConfig::default()
        };
        let result = ScanProcessor::new(config).scan_path(&file)?;
        let json = serde_json::to_value(&result)?;

        assert_eq!(json["stats"]["total_declarations"], 2);
        assert_eq!(json["files"][0]["declarations"][1]["kind"], "method");
        assert_eq!(json["files"][0]["declarations"][1]["name"], "run");
        Ok(())
    }
}
