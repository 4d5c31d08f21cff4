// Names the PhpStorm stubs map is known to miss
//
// Each entry points at the upstream pull request or issue that adds it.
// Drop entries once a regenerated stubs map ships them.

use crate::SymbolKind;

/// A built-in name missing from the reference map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Correction {
    pub name: &'static str,
    /// Upstream tracking link, if one exists
    pub issue: Option<&'static str>,
}

impl Correction {
    const fn new(name: &'static str, issue: &'static str) -> Self {
        Self {
            name,
            issue: Some(issue),
        }
    }

    const fn untracked(name: &'static str) -> Self {
        Self { name, issue: None }
    }
}

/// Corrections for one symbol kind, in maintenance order
pub fn corrections(kind: SymbolKind) -> &'static [Correction] {
    match kind {
        SymbolKind::Class => CLASSES,
        SymbolKind::Function => FUNCTIONS,
        SymbolKind::Constant => CONSTANTS,
    }
}

const STUBS_PR_594: &str = "https://github.com/JetBrains/phpstorm-stubs/pull/594";
const STUBS_PR_596: &str = "https://github.com/JetBrains/phpstorm-stubs/pull/596";
const STUBS_PR_600: &str = "https://github.com/JetBrains/phpstorm-stubs/pull/600";
const STUBS_PR_613: &str = "https://github.com/JetBrains/phpstorm-stubs/pull/613";
const YOUTRACK_WI_47038: &str = "https://youtrack.jetbrains.com/issue/WI-47038";

const CLASSES: &[Correction] = &[
    // php-uv
    Correction::new("UV", STUBS_PR_600),

    // php-crypto
    Correction::new("Crypto\\Cipher", STUBS_PR_596),
    Correction::new("Crypto\\CipherException", STUBS_PR_596),
    Correction::new("Crypto\\Hash", STUBS_PR_596),
    Correction::new("Crypto\\HashException", STUBS_PR_596),
    Correction::new("Crypto\\MAC", STUBS_PR_596),
    Correction::new("Crypto\\MACException", STUBS_PR_596),
    Correction::new("Crypto\\HMAC", STUBS_PR_596),
    Correction::new("Crypto\\CMAC", STUBS_PR_596),
    Correction::new("Crypto\\KDF", STUBS_PR_596),
    Correction::new("Crypto\\KDFException", STUBS_PR_596),
    Correction::new("Crypto\\PBKDF2", STUBS_PR_596),
    Correction::new("Crypto\\PBKDF2Exception", STUBS_PR_596),
    Correction::new("Crypto\\Base64", STUBS_PR_596),
    Correction::new("Crypto\\Base64Exception", STUBS_PR_596),
    Correction::new("Crypto\\Rand", STUBS_PR_596),
    Correction::new("Crypto\\RandException", STUBS_PR_596),

    // ext-parallel
    Correction::new("parallel\\Channel", STUBS_PR_594),
    Correction::new("parallel\\Channel\\Error", STUBS_PR_594),
    Correction::new("parallel\\Channel\\Error\\Closed", STUBS_PR_594),
    Correction::new("parallel\\Channel\\Error\\Existence", STUBS_PR_594),
    Correction::new("parallel\\Channel\\Error\\IllegalValue", STUBS_PR_594),
    Correction::new("parallel\\Error", STUBS_PR_594),
    Correction::new("parallel\\Events", STUBS_PR_594),
    Correction::new("parallel\\Events\\Error", STUBS_PR_594),
    Correction::new("parallel\\Events\\Error\\Existence", STUBS_PR_594),
    Correction::new("parallel\\Events\\Error\\Timeout", STUBS_PR_594),
    Correction::new("parallel\\Events\\Event", STUBS_PR_594),
    Correction::new("parallel\\Events\\Event\\Type", STUBS_PR_594),
    Correction::new("parallel\\Events\\Input", STUBS_PR_594),
    Correction::new("parallel\\Events\\Input\\Error", STUBS_PR_594),
    Correction::new("parallel\\Events\\Input\\Error\\Existence", STUBS_PR_594),
    Correction::new("parallel\\Events\\Input\\Error\\IllegalValue", STUBS_PR_594),
    Correction::new("parallel\\Future", STUBS_PR_594),
    Correction::new("parallel\\Future\\Error", STUBS_PR_594),
    Correction::new("parallel\\Future\\Error\\Cancelled", STUBS_PR_594),
    Correction::new("parallel\\Future\\Error\\Foreign", STUBS_PR_594),
    Correction::new("parallel\\Future\\Error\\Killed", STUBS_PR_594),
    Correction::new("parallel\\Runtime", STUBS_PR_594),
    Correction::new("parallel\\Runtime\\Bootstrap", STUBS_PR_594),
    Correction::new("parallel\\Runtime\\Error", STUBS_PR_594),
    Correction::new("parallel\\Runtime\\Error\\Bootstrap", STUBS_PR_594),
    Correction::new("parallel\\Runtime\\Error\\Closed", STUBS_PR_594),
    Correction::new("parallel\\Runtime\\Error\\IllegalFunction", STUBS_PR_594),
    Correction::new("parallel\\Runtime\\Error\\IllegalInstruction", STUBS_PR_594),
    Correction::new("parallel\\Runtime\\Error\\IllegalParameter", STUBS_PR_594),
    Correction::new("parallel\\Runtime\\Error\\IllegalReturn", STUBS_PR_594),
];

const FUNCTIONS: &[Correction] = &[
    // Windows console SAPI
    Correction::new("sapi_windows_vt100_support", STUBS_PR_613),

    // php-uv
    Correction::new("uv_unref", STUBS_PR_600),
    Correction::new("uv_last_error", STUBS_PR_600),
    Correction::new("uv_err_name", STUBS_PR_600),
    Correction::new("uv_strerror", STUBS_PR_600),
    Correction::new("uv_update_time", STUBS_PR_600),
    Correction::new("uv_ref", STUBS_PR_600),
    Correction::new("uv_run", STUBS_PR_600),
    Correction::new("uv_run_once", STUBS_PR_600),
    Correction::new("uv_loop_delete", STUBS_PR_600),
    Correction::new("uv_now", STUBS_PR_600),
    Correction::new("uv_tcp_bind", STUBS_PR_600),
    Correction::new("uv_tcp_bind6", STUBS_PR_600),
    Correction::new("uv_write", STUBS_PR_600),
    Correction::new("uv_write2", STUBS_PR_600),
    Correction::new("uv_tcp_nodelay", STUBS_PR_600),
    Correction::new("uv_accept", STUBS_PR_600),
    Correction::new("uv_shutdown", STUBS_PR_600),
    Correction::new("uv_close", STUBS_PR_600),
    Correction::new("uv_read_start", STUBS_PR_600),
    Correction::new("uv_read2_start", STUBS_PR_600),
    Correction::new("uv_read_stop", STUBS_PR_600),
    Correction::new("uv_ip4_addr", STUBS_PR_600),
    Correction::new("uv_ip6_addr", STUBS_PR_600),
    Correction::new("uv_listen", STUBS_PR_600),
    Correction::new("uv_tcp_connect", STUBS_PR_600),
    Correction::new("uv_tcp_connect6", STUBS_PR_600),
    Correction::new("uv_timer_init", STUBS_PR_600),
    Correction::new("uv_timer_start", STUBS_PR_600),
    Correction::new("uv_timer_stop", STUBS_PR_600),
    Correction::new("uv_timer_again", STUBS_PR_600),
    Correction::new("uv_timer_set_repeat", STUBS_PR_600),
    Correction::new("uv_timer_get_repeat", STUBS_PR_600),
    Correction::new("uv_idle_init", STUBS_PR_600),
    Correction::new("uv_idle_start", STUBS_PR_600),
    Correction::new("uv_idle_stop", STUBS_PR_600),
    Correction::new("uv_getaddrinfo", STUBS_PR_600),
    Correction::new("uv_tcp_init", STUBS_PR_600),
    Correction::new("uv_default_loop", STUBS_PR_600),
    Correction::new("uv_loop_new", STUBS_PR_600),
    Correction::new("uv_udp_init", STUBS_PR_600),
    Correction::new("uv_udp_bind", STUBS_PR_600),
    Correction::new("uv_udp_bind6", STUBS_PR_600),
    Correction::new("uv_udp_recv_start", STUBS_PR_600),
    Correction::new("uv_udp_recv_stop", STUBS_PR_600),
    Correction::new("uv_udp_set_membership", STUBS_PR_600),
    Correction::new("uv_udp_set_multicast_loop", STUBS_PR_600),
    Correction::new("uv_udp_set_multicast_ttl", STUBS_PR_600),
    Correction::new("uv_udp_set_broadcast", STUBS_PR_600),
    Correction::new("uv_udp_send", STUBS_PR_600),
    Correction::new("uv_udp_send6", STUBS_PR_600),
    Correction::new("uv_is_active", STUBS_PR_600),
    Correction::new("uv_is_readable", STUBS_PR_600),
    Correction::new("uv_is_writable", STUBS_PR_600),
    Correction::new("uv_walk", STUBS_PR_600),
    Correction::new("uv_guess_handle", STUBS_PR_600),
    Correction::new("uv_handle_type", STUBS_PR_600),
    Correction::new("uv_pipe_init", STUBS_PR_600),
    Correction::new("uv_pipe_open", STUBS_PR_600),
    Correction::new("uv_pipe_bind", STUBS_PR_600),
    Correction::new("uv_pipe_connect", STUBS_PR_600),
    Correction::new("uv_pipe_pending_instances", STUBS_PR_600),
    Correction::new("uv_ares_init_options", STUBS_PR_600),
    Correction::new("ares_gethostbyname", STUBS_PR_600),
    Correction::new("uv_loadavg", STUBS_PR_600),
    Correction::new("uv_uptime", STUBS_PR_600),
    Correction::new("uv_get_free_memory", STUBS_PR_600),
    Correction::new("uv_get_total_memory", STUBS_PR_600),
    Correction::new("uv_hrtime", STUBS_PR_600),
    Correction::new("uv_exepath", STUBS_PR_600),
    Correction::new("uv_cpu_info", STUBS_PR_600),
    Correction::new("uv_interface_addresses", STUBS_PR_600),
    Correction::new("uv_stdio_new", STUBS_PR_600),
    Correction::new("uv_spawn", STUBS_PR_600),
    Correction::new("uv_process_kill", STUBS_PR_600),
    Correction::new("uv_kill", STUBS_PR_600),
    Correction::new("uv_chdir", STUBS_PR_600),
    Correction::new("uv_rwlock_init", STUBS_PR_600),
    Correction::new("uv_rwlock_rdlock", STUBS_PR_600),
    Correction::new("uv_rwlock_tryrdlock", STUBS_PR_600),
    Correction::new("uv_rwlock_rdunlock", STUBS_PR_600),
    Correction::new("uv_rwlock_wrlock", STUBS_PR_600),
    Correction::new("uv_rwlock_trywrlock", STUBS_PR_600),
    Correction::new("uv_rwlock_wrunlock", STUBS_PR_600),
    Correction::new("uv_mutex_init", STUBS_PR_600),
    Correction::new("uv_mutex_lock", STUBS_PR_600),
    Correction::new("uv_mutex_trylock", STUBS_PR_600),
    Correction::new("uv_sem_init", STUBS_PR_600),
    Correction::new("uv_sem_post", STUBS_PR_600),
    Correction::new("uv_sem_wait", STUBS_PR_600),
    Correction::new("uv_sem_trywait", STUBS_PR_600),
    Correction::new("uv_prepare_init", STUBS_PR_600),
    Correction::new("uv_prepare_start", STUBS_PR_600),
    Correction::new("uv_prepare_stop", STUBS_PR_600),
    Correction::new("uv_check_init", STUBS_PR_600),
    Correction::new("uv_check_start", STUBS_PR_600),
    Correction::new("uv_check_stop", STUBS_PR_600),
    Correction::new("uv_async_init", STUBS_PR_600),
    Correction::new("uv_async_send", STUBS_PR_600),
    Correction::new("uv_queue_work", STUBS_PR_600),
    Correction::new("uv_fs_open", STUBS_PR_600),
    Correction::new("uv_fs_read", STUBS_PR_600),
    Correction::new("uv_fs_close", STUBS_PR_600),
    Correction::new("uv_fs_write", STUBS_PR_600),
    Correction::new("uv_fs_fsync", STUBS_PR_600),
    Correction::new("uv_fs_fdatasync", STUBS_PR_600),
    Correction::new("uv_fs_ftruncate", STUBS_PR_600),
    Correction::new("uv_fs_mkdir", STUBS_PR_600),
    Correction::new("uv_fs_rmdir", STUBS_PR_600),
    Correction::new("uv_fs_unlink", STUBS_PR_600),
    Correction::new("uv_fs_rename", STUBS_PR_600),
    Correction::new("uv_fs_utime", STUBS_PR_600),
    Correction::new("uv_fs_futime", STUBS_PR_600),
    Correction::new("uv_fs_chmod", STUBS_PR_600),
    Correction::new("uv_fs_fchmod", STUBS_PR_600),
    Correction::new("uv_fs_chown", STUBS_PR_600),
    Correction::new("uv_fs_fchown", STUBS_PR_600),
    Correction::new("uv_fs_link", STUBS_PR_600),
    Correction::new("uv_fs_symlink", STUBS_PR_600),
    Correction::new("uv_fs_readlink", STUBS_PR_600),
    Correction::new("uv_fs_stat", STUBS_PR_600),
    Correction::new("uv_fs_lstat", STUBS_PR_600),
    Correction::new("uv_fs_fstat", STUBS_PR_600),
    Correction::new("uv_fs_readdir", STUBS_PR_600),
    Correction::new("uv_fs_sendfile", STUBS_PR_600),
    Correction::new("uv_fs_event_init", STUBS_PR_600),
    Correction::new("uv_tty_init", STUBS_PR_600),
    Correction::new("uv_tty_get_winsize", STUBS_PR_600),
    Correction::new("uv_tty_set_mode", STUBS_PR_600),
    Correction::new("uv_tty_reset_mode", STUBS_PR_600),
    Correction::new("uv_tcp_getsockname", STUBS_PR_600),
    Correction::new("uv_tcp_getpeername", STUBS_PR_600),
    Correction::new("uv_udp_getsockname", STUBS_PR_600),
    Correction::new("uv_resident_set_memory", STUBS_PR_600),
    Correction::new("uv_ip4_name", STUBS_PR_600),
    Correction::new("uv_ip6_name", STUBS_PR_600),
    Correction::new("uv_poll_init", STUBS_PR_600),
    Correction::new("uv_poll_start", STUBS_PR_600),
    Correction::new("uv_poll_stop", STUBS_PR_600),
    Correction::new("uv_fs_poll_init", STUBS_PR_600),
    Correction::new("uv_fs_poll_start", STUBS_PR_600),
    Correction::new("uv_fs_poll_stop", STUBS_PR_600),
    Correction::new("uv_stop", STUBS_PR_600),
    Correction::new("uv_signal_stop", STUBS_PR_600),

    // ext-parallel
    Correction::new("parallel\\bootstrap", STUBS_PR_594),
    Correction::new("parallel\\run", STUBS_PR_594),

    // pcov
    Correction::new("pcov\\collect", YOUTRACK_WI_47038),
    Correction::new("pcov\\start", YOUTRACK_WI_47038),
    Correction::new("pcov\\stop", YOUTRACK_WI_47038),
    Correction::new("pcov\\clear", YOUTRACK_WI_47038),
    Correction::new("pcov\\waiting", YOUTRACK_WI_47038),
    Correction::new("pcov\\memory", YOUTRACK_WI_47038),
];

const CONSTANTS: &[Correction] = &[
    // CLI SAPI stream constants
    Correction::untracked("STDIN"),
    Correction::untracked("STDOUT"),
    Correction::untracked("STDERR"),

    // pcov
    Correction::new("pcov\\all", YOUTRACK_WI_47038),
    Correction::new("pcov\\inclusive", YOUTRACK_WI_47038),
    Correction::new("pcov\\exclusive", YOUTRACK_WI_47038),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lists_have_no_duplicates() {
        for kind in SymbolKind::ALL {
            let list = corrections(kind);
            let unique: HashSet<_> = list.iter().map(|c| c.name).collect();
            assert_eq!(unique.len(), list.len(), "duplicate {} correction", kind);
        }
    }

    #[test]
    fn test_list_sizes() {
        assert_eq!(corrections(SymbolKind::Class).len(), 47);
        assert_eq!(corrections(SymbolKind::Constant).len(), 6);
        assert!(corrections(SymbolKind::Function).len() > 140);
    }

    #[test]
    fn test_only_stdio_constants_are_untracked() {
        let untracked: Vec<_> = SymbolKind::ALL
            .iter()
            .flat_map(|&kind| corrections(kind))
            .filter(|c| c.issue.is_none())
            .map(|c| c.name)
            .collect();

        assert_eq!(untracked, vec!["STDIN", "STDOUT", "STDERR"]);
    }

    #[test]
    fn test_function_corrections_are_lowercase() {
        // Function tables fold case, so mixed-case entries would be misleading
        for correction in corrections(SymbolKind::Function) {
            assert_eq!(correction.name, correction.name.to_ascii_lowercase());
        }
    }
}
