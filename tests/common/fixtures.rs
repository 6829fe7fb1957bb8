/// A typical Jenkins configuration page.
pub const CONFIG_PAGE: &str = r#"<?jelly escape-by-default='true'?>
<j:jelly xmlns:j="jelly:core" xmlns:st="jelly:stapler" xmlns:l="/lib/layout" xmlns:f="/lib/form">
  <l:layout title="${%Configure}">
    <st:include page="sidepanel.jelly"/>
    <l:main-panel>
      <j:invokeStatic var="items" className="jenkins.model.Jenkins" method="get"/>
      <j:choose>
        <j:when test="${it.empty}">
          <p>${%No items}</p>
        </j:when>
        <j:otherwise>
          <f:entry title="${%Name}" field="name">
            <f:textbox/>
          </f:entry>
        </j:otherwise>
      </j:choose>
    </l:main-panel>
  </l:layout>
</j:jelly>
"#;

/// Leaf builder calls keep the space after `)`.
pub const CONFIG_PAGE_GROOVY: &str = r#"// Namespaces
j = namespace("jelly:core")
st = namespace("jelly:stapler")
l = namespace("/lib/layout")
f = namespace("/lib/form")


l.layout(title: _("Configure")) {
  st.include(page: "sidepanel.jelly") 
  l.main-panel() {
    def items = jenkins.model.Jenkins.get
      if(it.empty) {
        p(_("No items")) 
      }
      else {
        f.entry(title: _("Name"), field: "name") {
          f.textbox() 
        }
      }
  }
}
"#;

/// Declares `x` twice with different URIs in sibling scopes.
pub const CONFLICTING_PREFIXES: &str = r#"<j:jelly xmlns:j="jelly:core">
  <x:a xmlns:x="urn:A"/>
  <x:b xmlns:x="urn:B"/>
</j:jelly>"#;
