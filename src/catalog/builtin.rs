//! Built-in tool lists per profile.

use super::def::{DetectDef, InstallDef, ToolDef};
use super::profile::Profile;

const RUSTUP_SCRIPT: &str =
    "curl --proto '=https' --tlsv1.2 -sSf https://sh.rustup.rs | sh -s -- -y";

const HOMEBREW_SCRIPT: &str = "NONINTERACTIVE=1 /bin/bash -c \"$(curl -fsSL https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh)\"";

fn on_path(binary: &str) -> DetectDef {
    DetectDef::OnPath(binary.to_string())
}

fn command(cmd: &str) -> DetectDef {
    DetectDef::Command(cmd.to_string())
}

fn file(path: &str) -> DetectDef {
    DetectDef::File(path.to_string())
}

fn winget(id: &str) -> InstallDef {
    InstallDef::Winget(id.to_string())
}

fn apt(package: &str) -> InstallDef {
    InstallDef::Apt(package.to_string())
}

fn brew(formula: &str) -> InstallDef {
    InstallDef::Brew(formula.to_string())
}

fn script(cmd: &str) -> InstallDef {
    InstallDef::Script(cmd.to_string())
}

/// The built-in tools for `profile`, in install order.
///
/// `Auto` must be resolved first; it and `Custom` have no built-ins.
pub fn builtin_tools(profile: Profile) -> Vec<ToolDef> {
    match profile {
        Profile::Windows => windows(),
        Profile::Wsl => {
            let mut tools = debian();
            tools.push(ToolDef::new(
                "wslu",
                on_path("wslview"),
                apt("wslu"),
                "Run `sudo apt-get install wslu`, or see https://wslutiliti.es/wslu/install.html",
            ));
            tools
        }
        Profile::Linux => debian(),
        Profile::Macos => macos(),
        Profile::Auto | Profile::Custom => Vec::new(),
    }
}

fn windows() -> Vec<ToolDef> {
    vec![
        ToolDef::new(
            "WSL",
            command("wsl --status"),
            script("wsl --install"),
            "Run `wsl --install` from an Administrator PowerShell, then restart. See https://learn.microsoft.com/windows/wsl/install",
        ),
        ToolDef::new(
            "Git",
            on_path("git"),
            winget("Git.Git"),
            "Download Git for Windows from https://git-scm.com/download/win",
        ),
        ToolDef::new(
            "Node.js",
            on_path("node"),
            winget("OpenJS.NodeJS.LTS"),
            "Download the LTS installer from https://nodejs.org/en/download",
        ),
        // The Microsoft Store alias puts a python.exe stub on PATH
        ToolDef::new(
            "Python",
            command("python --version"),
            winget("Python.Python.3.12"),
            "Download Python 3 from https://www.python.org/downloads/windows/",
        ),
        ToolDef::new(
            "Go",
            on_path("go"),
            winget("GoLang.Go"),
            "Download Go from https://go.dev/dl/",
        ),
        ToolDef::new(
            "Rust",
            on_path("rustup"),
            winget("Rustlang.Rustup"),
            "Download rustup-init.exe from https://rustup.rs",
        ),
        ToolDef::new(
            "Java",
            on_path("java"),
            winget("Microsoft.OpenJDK.21"),
            "Download OpenJDK from https://learn.microsoft.com/java/openjdk/download",
        ),
        ToolDef::new(
            ".NET SDK",
            on_path("dotnet"),
            winget("Microsoft.DotNet.SDK.8"),
            "Download the .NET SDK from https://dotnet.microsoft.com/download",
        ),
    ]
}

fn debian() -> Vec<ToolDef> {
    vec![
        ToolDef::new(
            "build-essential",
            command("dpkg -s build-essential"),
            apt("build-essential"),
            "Run `sudo apt-get install build-essential`",
        ),
        ToolDef::new(
            "curl",
            on_path("curl"),
            apt("curl"),
            "Run `sudo apt-get install curl`",
        ),
        ToolDef::new(
            "Git",
            on_path("git"),
            apt("git"),
            "Run `sudo apt-get install git`, or see https://git-scm.com/download/linux",
        ),
        ToolDef::new(
            "Python",
            on_path("python3"),
            apt("python3"),
            "Run `sudo apt-get install python3`",
        ),
        ToolDef::new(
            "pip",
            command("python3 -m pip --version"),
            apt("python3-pip"),
            "Run `sudo apt-get install python3-pip`, or see https://pip.pypa.io/en/stable/installation/",
        ),
        ToolDef::new(
            "Node.js",
            on_path("node"),
            apt("nodejs"),
            "See https://nodejs.org/en/download/package-manager",
        ),
        ToolDef::new(
            "Go",
            on_path("go"),
            apt("golang-go"),
            "Download Go from https://go.dev/dl/",
        ),
        ToolDef::new(
            "Rust",
            DetectDef::Any(vec![on_path("rustup"), file("~/.cargo/bin/rustup")]),
            script(RUSTUP_SCRIPT),
            "See https://rustup.rs",
        ),
        ToolDef::new(
            "Java",
            on_path("java"),
            apt("default-jdk"),
            "Run `sudo apt-get install default-jdk`, or see https://adoptium.net",
        ),
        ToolDef::new(
            "unzip",
            on_path("unzip"),
            apt("unzip"),
            "Run `sudo apt-get install unzip`",
        ),
    ]
}

fn macos() -> Vec<ToolDef> {
    vec![
        ToolDef::new(
            "Homebrew",
            DetectDef::Any(vec![
                on_path("brew"),
                file("/opt/homebrew/bin/brew"),
                file("/usr/local/bin/brew"),
            ]),
            script(HOMEBREW_SCRIPT),
            "See https://brew.sh",
        ),
        ToolDef::new(
            "Git",
            on_path("git"),
            brew("git"),
            "Run `xcode-select --install`, or see https://git-scm.com/download/mac",
        ),
        ToolDef::new(
            "Node.js",
            on_path("node"),
            brew("node"),
            "Download the installer from https://nodejs.org/en/download",
        ),
        ToolDef::new(
            "Python",
            on_path("python3"),
            brew("python"),
            "Download Python 3 from https://www.python.org/downloads/macos/",
        ),
        ToolDef::new(
            "Go",
            on_path("go"),
            brew("go"),
            "Download Go from https://go.dev/dl/",
        ),
        ToolDef::new(
            "Rust",
            DetectDef::Any(vec![on_path("rustup"), file("~/.cargo/bin/rustup")]),
            script(RUSTUP_SCRIPT),
            "See https://rustup.rs",
        ),
        // /usr/bin/java is a stub that exists even without a JDK
        ToolDef::new(
            "Java",
            DetectDef::Any(vec![
                command("/usr/libexec/java_home"),
                file("/opt/homebrew/opt/openjdk"),
                file("/usr/local/opt/openjdk"),
            ]),
            brew("openjdk"),
            "Download OpenJDK from https://adoptium.net",
        ),
        ToolDef::new("jq", on_path("jq"), brew("jq"), "See https://jqlang.github.io/jq/download/"),
        ToolDef::new("wget", on_path("wget"), brew("wget"), "Run `brew install wget`"),
    ]
}
