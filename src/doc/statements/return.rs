/*!
# `RETURN`

## Purpose
Return from a subroutine started with `GOSUB`.

## Example
```text
10 GOSUB 100
20 END
100 PRINT "IN SUBROUTINE"
110 RETURN
RUN
IN SUBROUTINE
```

*/
