//! The fixed NGINX playbook written next to the inventory.
//!
//! Its content does not depend on the loaded records; it always targets the
//! `web_servers` group.

/// Default filename for the emitted playbook.
pub const DEFAULT_PLAYBOOK_FILE: &str = "install_nginx.yml";

/// Playbook body, written verbatim.
pub const NGINX_PLAYBOOK: &str = r#"
- name: Install and start NGINX
  hosts: web_servers
  become: yes
  tasks:
    - name: Install NGINX
      apt:
        name: nginx
        state: present
        update_cache: yes

    - name: Start NGINX service
      service:
        name: nginx
        state: started
        enabled: yes

"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playbook_targets_web_servers() {
        assert!(NGINX_PLAYBOOK.contains("hosts: web_servers"));
        assert!(NGINX_PLAYBOOK.contains("name: nginx"));
    }
}
