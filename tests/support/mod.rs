// ABOUTME: Test support utilities.
// ABOUTME: Provides descriptor fixtures and tree flattening helpers for integration tests.

use docktree::TreeNode;
use docktree::descriptor::RawDescriptor;
use serde_json::{Value, json};
use std::sync::Once;

/// Reference time used by every fixture.
pub const NOW: i64 = 1_700_000_000;

#[allow(dead_code)]
pub const DAY: i64 = 86_400;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env().add_directive("docktree=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

#[allow(dead_code)]
pub fn created_days_ago(days: i64) -> i64 {
    NOW - days * DAY
}

/// Eight containers listed newest first, created 1, 2, 3, 35, 36, 37, 90,
/// and 365 days before [`NOW`].
#[allow(dead_code)]
pub fn test_containers() -> Vec<RawDescriptor> {
    serde_json::from_value(test_containers_json()).unwrap()
}

/// [`test_containers`] as the Engine API would send them.
#[allow(dead_code)]
pub fn test_containers_json() -> Value {
    json!([
        {
            "Id": "9330566c414439f4873edd95689b559466993681f7b9741005b5a74786134202",
            "Names": ["/vigorous_booth"],
            "Image": "node:8.0",
            "ImageID": "sha256:065e283f68bd5ef3b079aee76d3aa55b5e56e8f9ede991a97ff15fdc556f8cfd",
            "Created": created_days_ago(1),
            "Ports": [],
            "State": "created",
            "Status": "Created"
        },
        {
            "Id": "faeb6f02af06df748a0040476ba7c335fb8aaefd76f6ea14a76800faf0fa3910",
            "Names": ["/elegant_knuth"],
            "Image": "registry:latest",
            "Created": created_days_ago(2),
            "Ports": [{ "IP": "0.0.0.0", "PrivatePort": 5000, "PublicPort": 5000, "Type": "tcp" }],
            "State": "running",
            "Status": "Up 6 minutes"
        },
        {
            "Id": "99636d5207b3da8a9865ef931aa3c758688e795e7787a6982fc7b5da07a5de8c",
            "Names": ["/focused_cori"],
            "Image": "mcr.microsoft.com/dotnet/core/sdk:latest",
            "Created": created_days_ago(3),
            "Ports": [],
            "State": "paused",
            "Status": "Up 8 minutes (Paused)"
        },
        {
            "Id": "49df1ed4a46c2617025298a8bdb01bc37267ecae82fc8ab88b0504314d94b983",
            "Names": ["/zealous_napier"],
            "Image": "emjacr2.azurecr.io/docker-django-webapp-linux:cj8",
            "Created": created_days_ago(35),
            "Ports": [
                { "IP": "0.0.0.0", "PrivatePort": 2222, "PublicPort": 2222, "Type": "tcp" },
                { "IP": "0.0.0.0", "PrivatePort": 8000, "PublicPort": 8000, "Type": "tcp" }
            ],
            "State": "running",
            "Status": "Up 8 minutes"
        },
        {
            "Id": "ee098ec2fb0b337e4f480a1a33dd1d396ef6b242579bb8b874e480957c053f34",
            "Names": ["/admiring_leavitt"],
            "Image": "vsc-js1-6b97c65e88377ff89a4eab7bc81b694d",
            "Created": created_days_ago(36),
            "Ports": [],
            "State": "exited",
            "Status": "Exited (137) 12 hours ago"
        },
        {
            "Id": "5e25d05c0797d44c0efaf3479633316f9229e3f71feccfbe2278c35681c0436f",
            "Names": ["/inspiring_brattain"],
            "Image": "acr-build-helloworld-node:latest",
            "Created": created_days_ago(37),
            "Ports": [{ "IP": "0.0.0.0", "PrivatePort": 80, "PublicPort": 80, "Type": "tcp" }],
            "State": "running",
            "Status": "Up 32 hours"
        },
        {
            "Id": "531005593f5da6f15ce13a6149a9b4866608fad5bddc600d37239e3d9976f00f",
            "Names": ["/elegant_mendel"],
            "Image": "test:latest",
            "Created": created_days_ago(90),
            "Ports": [],
            "State": "running",
            "Status": "Up 49 seconds"
        },
        {
            "Id": "99fd96f9cdf9fb7668887477f91b0c72682461690ff83030e8a6aa63a871f63a",
            "Names": ["/devtest"],
            "Image": "nginx:latest",
            "Created": created_days_ago(365),
            "Ports": [],
            "State": "exited",
            "Status": "Exited (0) 2 days ago"
        }
    ])
}

/// A node reduced to what tests compare: label, description, children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    pub label: String,
    pub description: Option<String>,
    pub children: Vec<Shape>,
}

#[allow(dead_code)]
pub fn leaf(label: &str, description: Option<&str>) -> Shape {
    Shape {
        label: label.to_string(),
        description: description.map(str::to_string),
        children: Vec::new(),
    }
}

#[allow(dead_code)]
pub fn group(label: &str, children: Vec<Shape>) -> Shape {
    Shape {
        label: label.to_string(),
        description: None,
        children,
    }
}

#[allow(dead_code)]
pub fn shape(nodes: &[TreeNode]) -> Vec<Shape> {
    nodes
        .iter()
        .map(|node| match node {
            TreeNode::Group(g) => group(&g.label, shape(&g.children)),
            TreeNode::Leaf(l) => Shape {
                label: l.label.clone(),
                description: l.description.clone(),
                children: Vec::new(),
            },
        })
        .collect()
}
