//! Resolve array/list workload pairs for heap and stack placement
use crate::WorkloadConfig;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Placement {
    Heap,
    Stack,
}

impl Placement {
    pub fn title(&self) -> &'static str {
        match self {
            Placement::Heap => "Heap",
            Placement::Stack => "Stack",
        }
    }

    pub fn array_name(&self) -> &'static str {
        match self {
            Placement::Heap => "array_add",
            Placement::Stack => "array_add_stack",
        }
    }

    pub fn list_name(&self) -> &'static str {
        match self {
            Placement::Heap => "list_add",
            Placement::Stack => "list_add_stack",
        }
    }
}

/// Which placements to report on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunMode {
    pub heap: bool,
    pub stack: bool,
}

impl RunMode {
    /// passing both flags leaves nothing to report
    pub fn from_flags(heap_only: bool, stack_only: bool) -> RunMode {
        RunMode {
            heap: !stack_only,
            stack: !heap_only,
        }
    }

    pub fn allows(&self, placement: Placement) -> bool {
        match placement {
            Placement::Heap => self.heap,
            Placement::Stack => self.stack,
        }
    }
}

impl Default for RunMode {
    fn default() -> Self {
        RunMode::from_flags(false, false)
    }
}

/// A workload together with the sample count selecting its result folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedWorkload {
    pub name: String,
    pub n: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pair {
    pub placement: Placement,
    pub array: ResolvedWorkload,
    pub list: ResolvedWorkload,
}

impl Pair {
    pub fn title(&self) -> &'static str {
        self.placement.title()
    }
}

fn resolve_workload(
    config: &WorkloadConfig,
    name: &str,
    n_override: Option<&str>,
) -> ResolvedWorkload {
    let n = match n_override {
        Some(n) => n.to_string(),
        None => config.params_for(name).n,
    };
    ResolvedWorkload {
        name: name.to_string(),
        n,
    }
}

/// Heap comes before Stack
pub fn resolve_pairs(
    config: &WorkloadConfig,
    mode: RunMode,
    n_override: Option<&str>,
) -> Vec<Pair> {
    let mut pairs = vec![];
    for placement in [Placement::Heap, Placement::Stack] {
        if !mode.allows(placement) {
            continue;
        }
        let (array_name, list_name) = (placement.array_name(), placement.list_name());
        if !config.contains(array_name) || !config.contains(list_name) {
            log::debug!(
                "{}: {} or {} not declared in WORKLOADS",
                placement.title(),
                array_name,
                list_name
            );
            continue;
        }

        // the declared flag must agree with the naming convention
        let stack = config.params_for(array_name).stack;
        if stack != (placement == Placement::Stack) {
            log::info!(
                "{}: dropping pair, stack_{} is {}",
                placement.title(),
                array_name,
                stack
            );
            continue;
        }

        pairs.push(Pair {
            placement,
            array: resolve_workload(config, array_name, n_override),
            list: resolve_workload(config, list_name, n_override),
        });
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_config;

    const CONFIG: &str = "\
WORKLOADS=(array_add list_add array_add_stack list_add_stack)
n_array_add=20000
n_list_add_stack=30000
stack_array_add_stack=1
stack_list_add_stack=1
";

    #[test]
    fn test_resolve_both() {
        let config = parse_config(CONFIG);
        let pairs = resolve_pairs(&config, RunMode::default(), None);
        assert_eq!(pairs.len(), 2);

        assert_eq!(pairs[0].title(), "Heap");
        assert_eq!(pairs[0].array.name, "array_add");
        assert_eq!(pairs[0].array.n, "20000");
        assert_eq!(pairs[0].list.name, "list_add");
        assert_eq!(pairs[0].list.n, "100000");

        assert_eq!(pairs[1].title(), "Stack");
        assert_eq!(pairs[1].array.n, "100000");
        assert_eq!(pairs[1].list.name, "list_add_stack");
        assert_eq!(pairs[1].list.n, "30000");
    }

    #[test]
    fn test_resolve_modes() {
        let config = parse_config(CONFIG);
        let heap = resolve_pairs(&config, RunMode::from_flags(true, false), None);
        assert_eq!(heap.len(), 1);
        assert_eq!(heap[0].placement, Placement::Heap);

        let stack = resolve_pairs(&config, RunMode::from_flags(false, true), None);
        assert_eq!(stack.len(), 1);
        assert_eq!(stack[0].placement, Placement::Stack);

        assert!(resolve_pairs(&config, RunMode::from_flags(true, true), None).is_empty());
    }

    #[test]
    fn test_override_n() {
        let config = parse_config(CONFIG);
        for pair in resolve_pairs(&config, RunMode::default(), Some("50000")) {
            assert_eq!(pair.array.n, "50000");
            assert_eq!(pair.list.n, "50000");
        }
    }

    #[test]
    fn test_flag_mismatch() {
        // stack pair declared as heap
        let config = parse_config(
            "WORKLOADS=(array_add list_add array_add_stack list_add_stack)\n\
             stack_array_add_stack=0\n",
        );
        let pairs = resolve_pairs(&config, RunMode::default(), None);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].placement, Placement::Heap);

        // heap pair declared as stack
        let config = parse_config("WORKLOADS=(array_add list_add)\nstack_array_add=1\n");
        assert!(resolve_pairs(&config, RunMode::default(), None).is_empty());
    }

    #[test]
    fn test_missing_member() {
        let config = parse_config("WORKLOADS=(array_add list_add_stack)\n");
        assert!(resolve_pairs(&config, RunMode::default(), None).is_empty());
    }
}
