//! Standard JCR privilege names.

pub const JCR_READ: &str = "jcr:read";
pub const JCR_MODIFY_PROPERTIES: &str = "jcr:modifyProperties";
pub const JCR_ADD_CHILD_NODES: &str = "jcr:addChildNodes";
pub const JCR_REMOVE_NODE: &str = "jcr:removeNode";
pub const JCR_REMOVE_CHILD_NODES: &str = "jcr:removeChildNodes";
pub const JCR_WRITE: &str = "jcr:write";
pub const JCR_READ_ACCESS_CONTROL: &str = "jcr:readAccessControl";
pub const JCR_MODIFY_ACCESS_CONTROL: &str = "jcr:modifyAccessControl";
pub const JCR_LOCK_MANAGEMENT: &str = "jcr:lockManagement";
pub const JCR_VERSION_MANAGEMENT: &str = "jcr:versionManagement";
pub const JCR_NODE_TYPE_MANAGEMENT: &str = "jcr:nodeTypeManagement";
pub const JCR_RETENTION_MANAGEMENT: &str = "jcr:retentionManagement";
pub const JCR_LIFECYCLE_MANAGEMENT: &str = "jcr:lifecycleManagement";
pub const JCR_WORKSPACE_MANAGEMENT: &str = "jcr:workspaceManagement";
pub const JCR_NODE_TYPE_DEFINITION_MANAGEMENT: &str = "jcr:nodeTypeDefinitionManagement";
pub const JCR_NAMESPACE_MANAGEMENT: &str = "jcr:namespaceManagement";
pub const JCR_ALL: &str = "jcr:all";
pub const REP_WRITE: &str = "rep:write";
pub const REP_PRIVILEGE_MANAGEMENT: &str = "rep:privilegeManagement";
