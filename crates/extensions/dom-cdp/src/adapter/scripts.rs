//! Function declarations run against an element through `Runtime.callFunctionOn`.
//!
//! Each function receives the element as `this`.

pub(crate) const IS_SELECTABLE: &str = r#"function() {
    const tag = this.tagName ? this.tagName.toLowerCase() : '';
    if (tag === 'option') return true;
    if (tag !== 'input') return false;
    const type = (this.type || '').toLowerCase();
    return type === 'checkbox' || type === 'radio';
}"#;

pub(crate) const IS_SELECTED: &str = r#"function() {
    const tag = this.tagName ? this.tagName.toLowerCase() : '';
    return tag === 'option' ? !!this.selected : !!this.checked;
}"#;

pub(crate) const GET_ATTRIBUTE: &str = r#"function(name) {
    if (name.toLowerCase() !== 'style') return this.getAttribute(name);
    const style = this.style;
    if (!style || style.length === 0) return null;
    const parts = [];
    for (let i = 0; i < style.length; i++) {
        const prop = style[i].toLowerCase();
        parts.push(prop + ': ' + style.getPropertyValue(prop) + ';');
    }
    return parts.join(' ');
}"#;

/// Returns `{kind, value}`; non-finite numbers travel as strings.
pub(crate) const GET_PROPERTY: &str = r#"function(name) {
    const value = this[name];
    if (value === undefined) return { kind: 'undefined' };
    if (value === null) return { kind: 'null' };
    switch (typeof value) {
        case 'boolean': return { kind: 'boolean', value };
        case 'string': return { kind: 'string', value };
        case 'number': return { kind: 'number', value: Number.isFinite(value) ? value : String(value) };
        case 'bigint': return { kind: 'number', value: Number(value) };
    }
    if (Array.isArray(value)) {
        return {
            kind: 'array',
            value: value.map((v) => (v === null || v === undefined) ? null : (typeof v === 'object' || typeof v === 'function') ? String(v) : v),
        };
    }
    return { kind: 'object' };
}"#;

pub(crate) const IS_ELEMENT_OF_TAG: &str = r#"function(tag) {
    return !!this.tagName && this.tagName.toLowerCase() === tag.toLowerCase();
}"#;

pub(crate) const IS_SHOWN: &str = r#"function() {
    if (!this.isConnected) return false;
    const tag = this.tagName ? this.tagName.toLowerCase() : '';
    if (tag === 'input' && (this.type || '').toLowerCase() === 'hidden') return false;
    for (let node = this; node && node.nodeType === 1; node = node.parentElement) {
        if (window.getComputedStyle(node).display === 'none') return false;
    }
    const style = window.getComputedStyle(this);
    if (style.visibility === 'hidden' || style.visibility === 'collapse') return false;
    if (parseFloat(style.opacity) === 0) return false;
    const rect = this.getBoundingClientRect();
    return rect.width > 0 && rect.height > 0;
}"#;

/// Page coordinates, `null` without a layout box.
pub(crate) const GET_BOUNDS: &str = r#"function() {
    if (this.getClientRects().length === 0) return null;
    const r = this.getBoundingClientRect();
    return { left: r.left + window.scrollX, top: r.top + window.scrollY, width: r.width, height: r.height };
}"#;

pub(crate) const SCROLL_INTO_VIEW: &str = r#"function(region) {
    this.scrollIntoView({ block: 'center', inline: 'center' });
    if (!region) return;
    const r = this.getBoundingClientRect();
    window.scrollBy(
        r.left + region.left + region.width / 2 - window.innerWidth / 2,
        r.top + region.top + region.height / 2 - window.innerHeight / 2,
    );
}"#;

pub(crate) const GET_CLIENT_REGION: &str = r#"function(region) {
    const r = this.getBoundingClientRect();
    if (!region) return { left: r.left, top: r.top, width: r.width, height: r.height };
    return { left: r.left + region.left, top: r.top + region.top, width: region.width, height: region.height };
}"#;

/// `composed` walks into open shadow roots.
pub(crate) const GET_VISIBLE_TEXT: &str = r#"function(composed) {
    const own = (root) => root.innerText !== undefined
        ? root.innerText
        : Array.from(root.children, (child) => child.innerText || '').join('\n');
    const collect = (root) => {
        const parts = [own(root)];
        if (composed) {
            const hosts = root.shadowRoot ? [root] : [];
            hosts.push(...Array.from(root.querySelectorAll('*')).filter((el) => el.shadowRoot));
            for (const host of hosts) parts.push(collect(host.shadowRoot));
        }
        return parts.filter((p) => p.length > 0).join('\n');
    };
    return collect(this);
}"#;
