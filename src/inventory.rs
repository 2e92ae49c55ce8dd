//! Generation of a large static Ansible inventory.
//!
//! Produces the JSON document a dynamic-inventory script emits for `--list`:
//! a `_meta.hostvars` table with per-host connection variables and a single
//! `test` group listing every host. Used to exercise inventory handling at
//! scale without provisioning real nodes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Hosts emitted when no count is given.
pub const DEFAULT_HOST_COUNT: usize = 8000;

const SSH_USER: &str = "rundeck";
const SSH_HOST: &str = "ssh-node";
const SOME_VAR: &str = "1234";

/// Connection variables attached to every generated host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostVars {
    pub ansible_ssh_user: String,
    pub ansible_host: String,
    #[serde(rename = "some-var")]
    pub some_var: String,
}

/// The `_meta` block carrying variables for all hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub hostvars: BTreeMap<String, HostVars>,
}

/// A named group of hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub hosts: Vec<String>,
}

/// Complete inventory document in the dynamic-inventory JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(rename = "_meta")]
    pub meta: Meta,
    pub test: Group,
}

/// Build an inventory of `hosts` nodes named `Node-0` through `Node-{n-1}`,
/// each pointing at the same SSH endpoint.
pub fn build(hosts: usize) -> Inventory {
    let mut hostvars = BTreeMap::new();
    let mut listed = Vec::with_capacity(hosts);
    for index in 0..hosts {
        let name = format!("Node-{}", index);
        hostvars.insert(
            name.clone(),
            HostVars {
                ansible_ssh_user: SSH_USER.to_string(),
                ansible_host: SSH_HOST.to_string(),
                some_var: SOME_VAR.to_string(),
            },
        );
        listed.push(name);
    }
    Inventory {
        meta: Meta { hostvars },
        test: Group { hosts: listed },
    }
}
